use changelog::features;

#[test]
fn feature_registry_matches_build() {
    assert_eq!(features::is_enabled("server"), cfg!(feature = "server"));
    assert!(!features::is_enabled("licensing"));
}

#[cfg(feature = "server")]
#[test]
fn init_is_repeatable() {
    let config = changelog::domain::config::ApiConfig::default();
    let first = changelog::init(&config).unwrap();
    let second = changelog::init(&config).unwrap();
    assert_eq!(first.config.server.port, second.config.server.port);
    assert!(!changelog::kernel::openapi::init().is_empty());
}
