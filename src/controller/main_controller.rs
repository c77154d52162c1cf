use crate::common::*;

use crate::enums::scheduler_transition::*;
use crate::traits::service_traits::scheduler_service::*;

#[derive(new)]
pub struct MainController<S: SchedulerService> {
    scheduler_service: S,
}

impl<S: SchedulerService> MainController<S> {
    #[doc = r#"
        애플리케이션의 수명주기를 담당하는 함수.

        1. 스케줄러를 시작한다 (설정 검증 실패 시 즉시 종료)
        2. 종료 시그널 (ctrl-c) 을 기다린다
        3. 스케줄러를 정지한다. 진행 중인 발송은 중단되지 않는다
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        match self.scheduler_service.start().await? {
            SchedulerTransition::Started => {
                info!(
                    "Scheduler is running. Daily send at {}. Press ctrl-c to stop.",
                    self.scheduler_service
                        .current_config()
                        .report()
                        .schedule_time()
                );
            }
            transition => {
                info!("[MainController->main_task] Unexpected start result: {:?}", transition);
            }
        }

        tokio::signal::ctrl_c().await?;
        info!("Shutdown signal received. Stopping scheduler.");

        let transition: SchedulerTransition = self.scheduler_service.stop().await;
        info!(
            "Scheduler stop result: {:?} (state: {})",
            transition,
            self.scheduler_service.state().as_str()
        );

        if let Some(outcome) = self.scheduler_service.last_send_outcome() {
            info!(
                "Last send attempt at {} : success={} ({})",
                outcome.attempted_at(),
                outcome.success(),
                outcome.detail()
            );
        }

        Ok(())
    }
}
