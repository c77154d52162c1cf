use crate::common::*;

use crate::dto::send_outcome::*;
use crate::enums::{scheduler_state::*, scheduler_transition::*};
use crate::errors::report_error::*;
use crate::model::configs::{report_config::*, total_config::*};
use crate::traits::service_traits::{
    notification_service::*, report_service::*, scheduler_service::*,
};
use crate::utils_modules::time_utils::*;

#[doc = r#"
    데일리 발송 스케줄러.

    상태는 STOPPED / RUNNING 두 가지뿐이며, 워커 태스크와 호출 스레드가
    공유하는 것은 AtomicBool 실행 플래그 하나다. 워커는 1초 간격으로 시계를
    폴링하다가 설정된 시각이 되면 compose_and_send 를 한 번 호출하고,
    다음 발동 시각을 다시 계산한다. 발송 실패는 로그와 상태 셀에만 반영되고
    스케줄은 그대로 유지된다.

    설정은 start 시점에 복사되어 워커로 넘어가므로, 발송 도중의 설정 변경은
    다음 start 전까지 워커에 반영되지 않는다.
"#]
pub struct SchedulerServiceImpl<R, N>
where
    R: ReportService + Send + Sync + 'static,
    N: NotificationService + Send + Sync + 'static,
{
    report_service: Arc<R>,
    notification_service: Arc<N>,
    config: Arc<RwLock<TotalConfig>>,
    config_path: String,
    running: Arc<AtomicBool>,
    last_outcome: Arc<RwLock<Option<SendOutcome>>>,
    worker_handle: Mutex<Option<JoinHandle<()>>>,
}

impl<R, N> SchedulerServiceImpl<R, N>
where
    R: ReportService + Send + Sync + 'static,
    N: NotificationService + Send + Sync + 'static,
{
    #[doc = "SchedulerServiceImpl 구조체의 생성자"]
    pub fn new(
        report_service: Arc<R>,
        notification_service: Arc<N>,
        config: TotalConfig,
        config_path: String,
    ) -> Self {
        SchedulerServiceImpl {
            report_service,
            notification_service,
            config: Arc::new(RwLock::new(config)),
            config_path,
            running: Arc::new(AtomicBool::new(false)),
            last_outcome: Arc::new(RwLock::new(None)),
            worker_handle: Mutex::new(None),
        }
    }

    #[doc = "현재 설정의 복사본을 반환하는 함수 (copy-on-read)"]
    fn read_config(&self) -> TotalConfig {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace_config(&self, config: TotalConfig) {
        match self.config.write() {
            Ok(mut guard) => *guard = config,
            Err(poisoned) => *poisoned.into_inner() = config,
        }
    }

    fn record_outcome(last_outcome: &Arc<RwLock<Option<SendOutcome>>>, outcome: SendOutcome) {
        match last_outcome.write() {
            Ok(mut guard) => *guard = Some(outcome),
            Err(poisoned) => *poisoned.into_inner() = Some(outcome),
        }
    }

    #[doc = r#"
        보고서를 렌더링해서 이메일로 발송하는 함수.

        본문 렌더링이 먼저다. 보고서 파일을 읽지 못하면 네트워크에 닿기 전에
        ReportUnreadable 로 실패한다.
    "#]
    async fn compose_and_send(
        report_service: &Arc<R>,
        notification_service: &Arc<N>,
        config: &TotalConfig,
    ) -> Result<(), ReportError> {
        let body_text: String = report_service
            .render_report_body(config.report().report_file())
            .await?;

        notification_service
            .send_report_email(config.smtp(), config.report(), &body_text)
            .await
    }

    #[doc = r#"
        워커 태스크의 본체.

        1. 설정된 HH:MM 으로 매일 발동하는 크론 스케줄을 만든다
        2. 다음 발동 시각을 계산한 뒤 1초 간격으로 폴링한다
           - 실행 플래그가 내려가면 한 틱 안에 루프를 빠져나간다
           - 발동 시각에 도달하면 compose_and_send 를 정확히 한 번 호출한다
        3. 결과를 상태 셀에 기록하고, 성공/실패와 무관하게 다음 발동 시각을
           다시 계산한다
    "#]
    async fn run_schedule_loop(
        report_service: Arc<R>,
        notification_service: Arc<N>,
        config: TotalConfig,
        running: Arc<AtomicBool>,
        last_outcome: Arc<RwLock<Option<SendOutcome>>>,
    ) {
        let (hour, minute): (u32, u32) = match parse_schedule_time(config.report().schedule_time())
        {
            Ok(pair) => pair,
            Err(e) => {
                error!("[SchedulerServiceImpl->run_schedule_loop] {:?}", e);
                running.store(false, Ordering::SeqCst);
                return;
            }
        };

        let cron_expr: String = build_daily_cron_expr(hour, minute);
        let schedule: cron::Schedule = match cron::Schedule::from_str(&cron_expr) {
            Ok(schedule) => schedule,
            Err(e) => {
                error!(
                    "[SchedulerServiceImpl->run_schedule_loop] Failed to parse cron schedule '{}' : {:?}",
                    cron_expr, e
                );
                running.store(false, Ordering::SeqCst);
                return;
            }
        };

        let mut ticker: Interval = interval(Duration::from_secs(1));

        loop {
            let next_run: DateTime<Local> = match schedule.after(&Local::now()).next() {
                Some(next_run) => next_run,
                None => {
                    error!("[SchedulerServiceImpl->run_schedule_loop] Failed to calculate next run time from cron schedule");
                    running.store(false, Ordering::SeqCst);
                    return;
                }
            };

            info!(
                "Next report send scheduled at {}",
                next_run.format("%Y-%m-%d %H:%M:%S")
            );

            loop {
                ticker.tick().await;

                if !running.load(Ordering::SeqCst) {
                    info!("Scheduler worker stopped.");
                    return;
                }

                if Local::now() >= next_run {
                    break;
                }
            }

            let outcome: SendOutcome = match Self::compose_and_send(
                &report_service,
                &notification_service,
                &config,
            )
            .await
            {
                Ok(()) => SendOutcome::new(
                    true,
                    format!("Report sent to {}", config.report().recipients().join(", ")),
                    get_current_local_datetime_str(),
                ),
                Err(e) => {
                    /* 실패해도 스케줄러는 멈추지 않는다. 다음 발동 시각에 다시 시도한다. */
                    error!(
                        "[SchedulerServiceImpl->run_schedule_loop] Failed to send report: {:?}",
                        e
                    );
                    SendOutcome::new(false, e.to_string(), get_current_local_datetime_str())
                }
            };

            Self::record_outcome(&last_outcome, outcome);
        }
    }
}

#[async_trait]
impl<R, N> SchedulerService for SchedulerServiceImpl<R, N>
where
    R: ReportService + Send + Sync + 'static,
    N: NotificationService + Send + Sync + 'static,
{
    #[doc = r#"
        STOPPED -> RUNNING 전환.

        설정을 검증하고, 비밀정보가 아닌 레코드를 저장한 뒤, 워커 태스크를
        띄운다. 이미 RUNNING 인 경우에는 아무것도 하지 않고 no-op 으로 보고한다.
    "#]
    async fn start(&self) -> anyhow::Result<SchedulerTransition> {
        if self.running.load(Ordering::SeqCst) {
            info!("[SchedulerServiceImpl->start] Scheduler is already running.");
            return Ok(SchedulerTransition::AlreadyRunning);
        }

        let mut config: TotalConfig = self.read_config();
        config.report.dedup_attachments();
        config.validate()?;
        config.report.save_to(&self.config_path)?;

        self.replace_config(config.clone());
        self.running.store(true, Ordering::SeqCst);

        let handle: JoinHandle<()> = tokio::spawn(Self::run_schedule_loop(
            Arc::clone(&self.report_service),
            Arc::clone(&self.notification_service),
            config.clone(),
            Arc::clone(&self.running),
            Arc::clone(&self.last_outcome),
        ));

        match self.worker_handle.lock() {
            Ok(mut guard) => *guard = Some(handle),
            Err(poisoned) => *poisoned.into_inner() = Some(handle),
        }

        info!(
            "Scheduler started. Daily send scheduled at {}",
            config.report().schedule_time()
        );

        Ok(SchedulerTransition::Started)
    }

    #[doc = r#"
        RUNNING -> STOPPED 전환.

        실행 플래그만 내린다. 워커는 다음 폴링 틱에서 플래그를 관측하고
        스스로 종료하며, 진행 중인 발송은 끝까지 수행된다.
        이미 STOPPED 인 경우에는 no-op 으로 보고한다.
    "#]
    async fn stop(&self) -> SchedulerTransition {
        if !self.running.swap(false, Ordering::SeqCst) {
            info!("[SchedulerServiceImpl->stop] Scheduler is not running.");
            return SchedulerTransition::AlreadyStopped;
        }

        match self.worker_handle.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }

        info!("Scheduler stop requested.");
        SchedulerTransition::StopRequested
    }

    #[doc = "현재 설정으로 즉시 한 번 발송해보는 함수. 스케줄러 상태는 바꾸지 않는다."]
    async fn send_test_report(&self) -> Result<(), ReportError> {
        let config: TotalConfig = self.read_config();
        config.validate()?;

        let result: Result<(), ReportError> =
            Self::compose_and_send(&self.report_service, &self.notification_service, &config).await;

        let outcome: SendOutcome = match &result {
            Ok(()) => SendOutcome::new(
                true,
                format!(
                    "Test report sent to {}",
                    config.report().recipients().join(", ")
                ),
                get_current_local_datetime_str(),
            ),
            Err(e) => SendOutcome::new(false, e.to_string(), get_current_local_datetime_str()),
        };

        Self::record_outcome(&self.last_outcome, outcome);
        result
    }

    #[doc = "발송 설정 레코드를 검증 / 저장하고 현재 설정으로 교체하는 함수"]
    fn save_config(&self, mut report_config: ReportConfig) -> anyhow::Result<()> {
        report_config.dedup_attachments();

        let mut candidate: TotalConfig =
            TotalConfig::new(self.read_config().smtp().clone(), report_config);
        candidate.validate()?;
        candidate.report.save_to(&self.config_path)?;

        self.replace_config(candidate);
        Ok(())
    }

    fn state(&self) -> SchedulerState {
        if self.running.load(Ordering::SeqCst) {
            SchedulerState::Running
        } else {
            SchedulerState::Stopped
        }
    }

    fn current_config(&self) -> TotalConfig {
        self.read_config()
    }

    fn last_send_outcome(&self) -> Option<SendOutcome> {
        match self.last_outcome.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
