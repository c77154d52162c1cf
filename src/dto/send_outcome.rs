use crate::common::*;

#[doc = "마지막 발송 시도의 결과. 상태 표시용으로 보관된다."]
#[derive(Debug, Clone, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SendOutcome {
    pub success: bool,
    pub detail: String,
    pub attempted_at: String,
}
