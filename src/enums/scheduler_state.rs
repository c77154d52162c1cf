#[doc = "스케줄러의 상태"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

impl SchedulerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulerState::Stopped => "STOPPED",
            SchedulerState::Running => "RUNNING",
        }
    }
}
