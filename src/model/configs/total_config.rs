use crate::common::*;

use crate::errors::report_error::*;
use crate::model::configs::{report_config::*, smtp_config::*};
use crate::utils_modules::{time_utils::*, validation_utils::*};

#[doc = r#"
    발송 한 사이클에 필요한 전체 설정.

    환경변수에서 읽은 SMTP 접속 정보와 파일에 저장되는 발송 설정 레코드를 합친
    단위로, 스케줄러가 시작될 때 검증 대상이 되고 워커에는 복사본으로 전달된다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub smtp: SmtpConfig,
    pub report: ReportConfig,
}

impl TotalConfig {
    #[doc = "환경변수와 저장된 설정 파일로부터 전체 설정을 읽어오는 함수"]
    pub fn load() -> Self {
        TotalConfig::new(SmtpConfig::from_env(), ReportConfig::load())
    }

    #[doc = r#"
        발송 전 설정 검증. 처음으로 위반된 필드에서 즉시 실패하며,
        부분적으로 통과시키지 않는다.

        검증 순서: 발신자 이메일 -> 수신자 목록 -> SMTP 포트 -> 보고서 파일 존재
        -> 스케줄 시각 형식/범위 -> 제목 -> 첨부파일 존재
    "#]
    pub fn validate(&self) -> Result<(), ReportError> {
        let sender_email: &str = self.smtp.sender_email();
        if !is_valid_email(sender_email) {
            return Err(ReportError::validation(
                "sender_email",
                "Sender email is invalid or missing. Set EMAIL in the environment.",
            ));
        }

        if self.report.recipients().is_empty() {
            return Err(ReportError::validation(
                "recipients",
                "At least one recipient email is required.",
            ));
        }

        for recipient in self.report.recipients() {
            if !is_valid_email(recipient) {
                return Err(ReportError::validation(
                    "recipients",
                    format!("Invalid recipient email: '{}'", recipient),
                ));
            }
        }

        if *self.smtp.smtp_port() == 0 {
            return Err(ReportError::validation(
                "smtp_port",
                "SMTP port must be in range 1-65535.",
            ));
        }

        if !Path::new(self.report.report_file()).is_file() {
            return Err(ReportError::validation(
                "report_file",
                format!(
                    "Report file path is invalid or does not exist: '{}'",
                    self.report.report_file()
                ),
            ));
        }

        if let Err(e) = parse_schedule_time(self.report.schedule_time()) {
            return Err(ReportError::validation("schedule_time", e.to_string()));
        }

        if self.report.subject().trim().is_empty() {
            return Err(ReportError::validation(
                "subject",
                "Email subject cannot be empty.",
            ));
        }

        for attachment in self.report.attachments() {
            if !Path::new(attachment).is_file() {
                return Err(ReportError::validation(
                    "attachments",
                    format!("Attachment path does not exist: '{}'", attachment),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config(report_file: &str) -> TotalConfig {
        TotalConfig::new(
            SmtpConfig::new(
                "smtp.gmail.com".to_string(),
                587,
                "sender@mail.com".to_string(),
                "app-password".to_string(),
            ),
            ReportConfig {
                recipients: vec!["a@x.com".to_string()],
                report_file: report_file.to_string(),
                schedule_time: "09:00".to_string(),
                subject: "Daily".to_string(),
                attachments: Vec::new(),
            },
        )
    }

    fn violated_field(config: &TotalConfig) -> &'static str {
        match config.validate() {
            Err(ReportError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_config_with_every_field_satisfied() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.csv");
        fs::write(&report, "name,count\na,1\n").unwrap();

        let config = valid_config(report.to_str().unwrap());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_with_first_violated_field_identified() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.csv");
        fs::write(&report, "name,count\na,1\n").unwrap();
        let report_path = report.to_str().unwrap();

        let mut config = valid_config(report_path);
        config.smtp.sender_email = "not-an-email".to_string();
        assert_eq!(violated_field(&config), "sender_email");

        let mut config = valid_config(report_path);
        config.report.recipients = Vec::new();
        assert_eq!(violated_field(&config), "recipients");

        let mut config = valid_config(report_path);
        config.report.recipients = vec!["a@x.com".to_string(), "broken".to_string()];
        assert_eq!(violated_field(&config), "recipients");

        let mut config = valid_config(report_path);
        config.smtp.smtp_port = 0;
        assert_eq!(violated_field(&config), "smtp_port");

        let mut config = valid_config(report_path);
        config.report.report_file = "missing.csv".to_string();
        assert_eq!(violated_field(&config), "report_file");

        let mut config = valid_config(report_path);
        config.report.schedule_time = "25:00".to_string();
        assert_eq!(violated_field(&config), "schedule_time");

        let mut config = valid_config(report_path);
        config.report.subject = "   ".to_string();
        assert_eq!(violated_field(&config), "subject");

        let mut config = valid_config(report_path);
        config.report.attachments = vec!["gone.pdf".to_string()];
        assert_eq!(violated_field(&config), "attachments");
    }
}
