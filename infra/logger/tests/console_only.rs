use changelog_logger::{LevelFilter, Logger};

#[test]
fn console_only_writes_no_files() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_files(), "console-only logger should not hold a file writer");
}
