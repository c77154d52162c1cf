use crate::common::*;

use crate::env_configuration::env_config::*;
use crate::utils_modules::io_utils::*;

#[doc = r#"
    비밀정보가 아닌 발송 설정 레코드.

    수신자 목록 / 보고서 파일 경로 / 스케줄 시각 / 제목 / 첨부파일 목록만 가지며,
    `REPORT_CONFIG_PATH` 경로의 TOML 파일로 저장된다. 발신자 계정 정보는
    `SmtpConfig` 가 환경변수에서 따로 읽어오므로 여기에 포함되지 않는다.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ReportConfig {
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub report_file: String,
    #[serde(default = "default_schedule_time")]
    pub schedule_time: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

fn default_schedule_time() -> String {
    String::from("09:00")
}

fn default_subject() -> String {
    String::from("Daily Report")
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recipients: Vec::new(),
            report_file: String::new(),
            schedule_time: default_schedule_time(),
            subject: default_subject(),
            attachments: Vec::new(),
        }
    }
}

impl ReportConfig {
    #[doc = "저장된 설정 레코드를 읽어오는 함수. 파일이 없거나 깨진 경우 기본값으로 시작한다."]
    pub fn load() -> Self {
        Self::load_from(&REPORT_CONFIG_PATH)
    }

    #[doc = ""]
    pub fn load_from(file_path: &str) -> Self {
        match read_toml_from_file::<ReportConfig>(file_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "[ReportConfig->load_from] Failed to load config file '{}'. Starting with defaults. : {:?}",
                    file_path, e
                );
                ReportConfig::default()
            }
        }
    }

    #[doc = "설정 레코드를 저장하는 함수. 첨부파일 목록의 중복을 제거한 뒤 같은 경로에 덮어쓴다."]
    pub fn save_to(&mut self, file_path: &str) -> anyhow::Result<()> {
        self.dedup_attachments();
        write_toml_to_file(self, file_path)?;

        info!("Configuration saved to '{}'", file_path);
        Ok(())
    }

    #[doc = "첨부파일 경로 목록에서 중복을 제거하는 함수. 처음 등장한 순서는 유지한다."]
    pub fn dedup_attachments(&mut self) {
        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        self.attachments.retain(|path| seen.insert(path.clone()));
    }
}
