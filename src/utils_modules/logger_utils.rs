use crate::common::*;

#[doc = r#"
    전역 로거를 설정해주는 함수.

    `logs/` 디렉토리 하위 파일로 로그를 남기며, 하루 단위로 파일을 교체하고
    최근 10개의 로그 파일만 보관한다. 발송 실패를 포함한 모든 오류가
    이 파일 로그에 영구적으로 기록된다.
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .expect("Failed to initialize logger settings.")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format(custom_format)
        .append()
        .start()
        .expect("Failed to start global logger.");
}

#[doc = "로그 라인 포멧"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}
