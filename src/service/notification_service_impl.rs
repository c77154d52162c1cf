use crate::common::*;

use crate::errors::report_error::*;
use crate::model::configs::{report_config::*, smtp_config::*};
use crate::traits::service_traits::notification_service::*;

#[derive(Debug, new)]
pub struct NotificationServiceImpl;

impl NotificationServiceImpl {
    #[doc = r#"
        발송할 이메일 메시지를 구성하는 함수.

        수신자 전체를 하나의 메시지에 담고, 본문은 고정폭 텍스트 파트로,
        첨부파일은 파일당 하나의 바이너리 파트로 붙인다. 검증 이후에 디스크에서
        사라진 첨부파일은 실패 처리하지 않고 경고만 남긴 뒤 건너뛴다.
    "#]
    fn build_report_message(
        smtp_config: &SmtpConfig,
        report_config: &ReportConfig,
        body_text: &str,
    ) -> Result<Message, ReportError> {
        let from: Mailbox = smtp_config
            .sender_email()
            .parse()
            .map_err(ReportError::send)?;

        let mut builder = Message::builder()
            .from(from)
            .subject(report_config.subject().to_string());

        for recipient in report_config.recipients() {
            let to: Mailbox = recipient.parse().map_err(ReportError::send)?;
            builder = builder.to(to);
        }

        let mut multipart: MultiPart =
            MultiPart::mixed().singlepart(SinglePart::plain(body_text.to_string()));

        for attachment_path in report_config.attachments() {
            let path: &Path = Path::new(attachment_path);

            let content: Vec<u8> = match fs::read(path) {
                Ok(content) => content,
                Err(e) => {
                    warn!(
                        "[NotificationServiceImpl->build_report_message] Attachment no longer exists. Skipping '{}' : {:?}",
                        attachment_path, e
                    );
                    continue;
                }
            };

            let filename: String = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("attachment")
                .to_string();

            let content_type: ContentType =
                ContentType::parse("application/octet-stream").map_err(ReportError::send)?;

            multipart =
                multipart.singlepart(Attachment::new(filename).body(Body::new(content), content_type));
        }

        builder.multipart(multipart).map_err(ReportError::send)
    }

    #[doc = "STARTTLS 로 암호화 채널을 연 뒤 발신자 계정으로 인증하는 SMTP 전송기를 만드는 함수"]
    fn build_mailer(
        smtp_config: &SmtpConfig,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, ReportError> {
        let creds: Credentials = Credentials::new(
            smtp_config.sender_email().to_string(),
            smtp_config.sender_password().to_string(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_config.smtp_host().as_str())
                .map_err(ReportError::send)?
                .port(*smtp_config.smtp_port())
                .credentials(creds)
                .build();

        Ok(mailer)
    }
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    #[doc = r#"
        보고서 이메일을 발송하는 함수.

        수신자 전원을 하나의 SMTP 트랜잭션으로 전송하며, 어느 단계에서든
        실패하면 원인을 담은 SendError 하나로 보고한다. 수신자 일부에 대한
        재시도는 하지 않는다.
    "#]
    async fn send_report_email(
        &self,
        smtp_config: &SmtpConfig,
        report_config: &ReportConfig,
        body_text: &str,
    ) -> Result<(), ReportError> {
        if smtp_config.sender_email().is_empty() || smtp_config.sender_password().is_empty() {
            return Err(ReportError::send(anyhow!(
                "Sender email or password missing in environment variables."
            )));
        }

        let email: Message = Self::build_report_message(smtp_config, report_config, body_text)?;
        let mailer: AsyncSmtpTransport<Tokio1Executor> = Self::build_mailer(smtp_config)?;

        match mailer.send(email).await {
            Ok(_) => {
                info!(
                    "Email sent successfully to {}",
                    report_config.recipients().join(", ")
                );
                Ok(())
            }
            Err(e) => Err(ReportError::send(anyhow!(
                "Failed to send email to {} : {:?}",
                report_config.recipients().join(", "),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smtp_config() -> SmtpConfig {
        SmtpConfig::new(
            "smtp.gmail.com".to_string(),
            587,
            "sender@mail.com".to_string(),
            "app-password".to_string(),
        )
    }

    fn report_config(attachments: Vec<String>) -> ReportConfig {
        ReportConfig {
            recipients: vec!["a@x.com".to_string(), "b@y.com".to_string()],
            report_file: "report.csv".to_string(),
            schedule_time: "09:00".to_string(),
            subject: "Daily".to_string(),
            attachments,
        }
    }

    #[test]
    fn message_addresses_all_recipients_in_one_transaction() {
        let message =
            NotificationServiceImpl::build_report_message(&smtp_config(), &report_config(Vec::new()), "body")
                .unwrap();

        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("a@x.com"));
        assert!(formatted.contains("b@y.com"));
        assert!(formatted.contains("Subject: Daily"));
    }

    #[test]
    fn vanished_attachment_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let kept = dir.path().join("kept.bin");
        fs::write(&kept, [0u8, 159, 146, 150]).unwrap();

        let vanished = dir.path().join("vanished.bin");
        let attachments = vec![
            kept.to_str().unwrap().to_string(),
            vanished.to_str().unwrap().to_string(),
        ];

        let message = NotificationServiceImpl::build_report_message(
            &smtp_config(),
            &report_config(attachments),
            "body",
        )
        .unwrap();

        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("kept.bin"));
        assert!(!formatted.contains("vanished.bin"));
    }

    #[tokio::test]
    async fn missing_credentials_fail_as_send_error() {
        let service = NotificationServiceImpl::new();
        let smtp = SmtpConfig::new("smtp.gmail.com".to_string(), 587, String::new(), String::new());

        let result = service
            .send_report_email(&smtp, &report_config(Vec::new()), "body")
            .await;

        assert!(matches!(result, Err(ReportError::Send { .. })));
    }
}
