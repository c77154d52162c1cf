/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description :

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;
use env_configuration::env_config::*;

mod errors;

mod traits;

mod enums;

mod dto;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    notification_service_impl::*, report_service_impl::*, scheduler_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    set_global_logger();

    info!("Auto email report program start!");

    /* 환경변수의 SMTP 접속 정보 + 저장된 발송 설정 레코드 */
    let total_config: TotalConfig = TotalConfig::load();

    /* 의존 주입 */
    let report_service: Arc<ReportServiceImpl> = Arc::new(ReportServiceImpl::new());
    let notification_service: Arc<NotificationServiceImpl> =
        Arc::new(NotificationServiceImpl::new());

    let scheduler_service: SchedulerServiceImpl<ReportServiceImpl, NotificationServiceImpl> =
        SchedulerServiceImpl::new(
            report_service,
            notification_service,
            total_config,
            REPORT_CONFIG_PATH.to_string(),
        );

    let main_controller: MainController<
        SchedulerServiceImpl<ReportServiceImpl, NotificationServiceImpl>,
    > = MainController::new(scheduler_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
