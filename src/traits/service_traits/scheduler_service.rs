use crate::common::*;

use crate::dto::send_outcome::*;
use crate::enums::{scheduler_state::*, scheduler_transition::*};
use crate::errors::report_error::*;
use crate::model::configs::{report_config::*, total_config::*};

#[async_trait]
pub trait SchedulerService {
    async fn start(&self) -> anyhow::Result<SchedulerTransition>;
    async fn stop(&self) -> SchedulerTransition;
    async fn send_test_report(&self) -> Result<(), ReportError>;
    fn save_config(&self, report_config: ReportConfig) -> anyhow::Result<()>;
    fn state(&self) -> SchedulerState;
    fn current_config(&self) -> TotalConfig;
    fn last_send_outcome(&self) -> Option<SendOutcome>;
}
