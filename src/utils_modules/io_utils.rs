use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 오류 반환

    # Arguments
    * `file_path` - 읽을 대상 toml 파일이 존재하는 경로

    # Returns
    * `Result<T, anyhow::Error>`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    구조체를 TOML 문자열로 직렬화하여 지정된 경로에 저장하는 제네릭 함수.

    설정 레코드를 저장할 때 사용하며, 부모 디렉토리가 없으면 먼저 생성한다.
    같은 경로에 파일이 이미 존재하는 경우에는 덮어쓴다.

    # Arguments
    * `input_struct` - 저장할 구조체
    * `file_path` - 저장 대상 toml 파일 경로

    # Returns
    * `Result<(), anyhow::Error>`
"#]
pub fn write_toml_to_file<T: Serialize>(input_struct: &T, file_path: &str) -> Result<(), anyhow::Error> {
    let toml_content: String = toml::to_string_pretty(input_struct)?;

    if let Some(parent) = Path::new(file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(file_path, toml_content)?;

    Ok(())
}
