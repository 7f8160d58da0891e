use changelog_domain::config::LoggingConfig;
use changelog_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn logging_section_enables_json_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "debug".to_owned(),
        json: true,
        directory: Some(log_dir.clone()),
        env_filter: Some("info".to_owned()),
    };

    let logger = Logger::from_config("integration-file-logging", &config)?;
    assert!(logger.writes_files());

    tracing::info!(entry = "e1", "changelog entry published");
    tracing::debug!("filtered out by the explicit filter");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains(r#""message":"changelog entry published""#), "{contents}");
    assert!(contents.contains(r#""entry":"e1""#));
    assert!(!contents.contains("filtered out"));

    Ok(())
}
