#[doc = "start / stop 명령의 처리 결과. 이미 같은 상태인 경우 no-op 으로 보고된다."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerTransition {
    Started,
    AlreadyRunning,
    StopRequested,
    AlreadyStopped,
}
