use changelog_domain::config::{ApiConfig, LoggingConfig, PaginationConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4680);
    assert!(server.address.is_unspecified());

    let paging = PaginationConfig::default();
    assert_eq!(paging.default_page_size, 20);
    assert_eq!(paging.max_page_size, 100);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "api": { "default_page_size": 10, "max_page_size": 50 },
        "logging": { "level": "debug", "json": true, "directory": "/tmp/logs" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.api.max_page_size, 50);
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({ "server": { "port": 9000 } })).unwrap();
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.api.default_page_size, 20);
}

#[test]
fn deref_mut_clones_on_write() {
    let shared = ApiConfig::default();
    let mut local = shared.clone();
    local.server.port = 1;
    assert_eq!(shared.server.port, 4680);
    assert_eq!(local.server.port, 1);
}
