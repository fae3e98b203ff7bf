use crate::common::*;

#[doc = "로그 파일 한 줄 포맷: [시각] [레벨] T[스레드] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 초기화하는 함수.

    - `logs/` 디렉토리에 하루 단위로 로그 파일을 교체하며 최근 10개 파일만 유지
    - info 레벨 이상은 표준출력에도 함께 출력
    - 초기화에 실패하면 프로그램을 계속 진행할 수 없으므로 panic
    - 반환된 handle 이 drop 되면 파일 로깅이 종료되므로 main 에서 끝까지 보관해야 한다
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .discriminant("sheet_chart_agent"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .duplicate_to_stdout(Duplicate::Info)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
