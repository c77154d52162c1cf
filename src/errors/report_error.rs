use crate::common::*;

#[doc = r#"
    스케줄 발송 파이프라인에서 발생할 수 있는 오류 종류.

    - `Validation` : 발송 전 설정 검증 실패. 위반한 필드명을 같이 들고 다닌다.
    - `ReportUnreadable` : 발송 시점에 보고서 파일이 없거나 파싱이 불가능한 경우.
    - `Send` : 전송 단계의 모든 실패 (DNS / TLS / 인증 / 수신 거부).
      원인을 구분하지 않고 하나의 종류로 보고하며, 재시도하지 않는다.
"#]
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("[ValidationError][{field}] {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("[ReportUnreadable][{path}] {source}")]
    ReportUnreadable {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("[SendError] {source}")]
    Send {
        #[source]
        source: anyhow::Error,
    },
}

impl ReportError {
    #[doc = ""]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ReportError::Validation {
            field,
            reason: reason.into(),
        }
    }

    #[doc = ""]
    pub fn unreadable(path: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        ReportError::ReportUnreadable {
            path: path.into(),
            source: source.into(),
        }
    }

    #[doc = ""]
    pub fn send(source: impl Into<anyhow::Error>) -> Self {
        ReportError::Send {
            source: source.into(),
        }
    }
}
