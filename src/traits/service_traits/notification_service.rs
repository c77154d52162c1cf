use crate::common::*;

use crate::errors::report_error::*;
use crate::model::configs::{report_config::*, smtp_config::*};

#[async_trait]
pub trait NotificationService {
    async fn send_report_email(
        &self,
        smtp_config: &SmtpConfig,
        report_config: &ReportConfig,
        body_text: &str,
    ) -> Result<(), ReportError>;
}
