use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = r#"
    SMTP 접속 정보. 발신자 계정과 비밀번호가 포함되므로 파일로 저장하지 않고
    프로세스 환경변수에서만 읽어온다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct SmtpConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender_email: String,
    pub sender_password: String,
}

impl SmtpConfig {
    #[doc = "환경변수 (SMTP_SERVER / SMTP_PORT / EMAIL / PASSWORD) 로부터 SMTP 설정을 읽어오는 함수"]
    pub fn from_env() -> Self {
        let smtp_host: String = get_env_or_default("SMTP_SERVER", "smtp.gmail.com");

        let smtp_port: u16 = match get_env_or_default("SMTP_PORT", "587").parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                warn!("[SmtpConfig->from_env] SMTP_PORT is not a valid number. Falling back to 587.");
                587
            }
        };

        let sender_email: String = get_env_or_default("EMAIL", "");
        let sender_password: String = get_env_or_default("PASSWORD", "");

        SmtpConfig::new(smtp_host, smtp_port, sender_email, sender_password)
    }
}
