#![cfg(feature = "server")]

use changelog_kernel::domain::config::ApiConfig;
use changelog_kernel::openapi::{init, register};
use changelog_kernel::server::ApiState;
use changelog_kernel::server::router::build;
use utoipa::openapi::OpenApi;

fn schema_names(api: &OpenApi) -> Vec<String> {
    api.components.as_ref().map(|c| c.schemas.keys().cloned().collect()).unwrap_or_default()
}

#[test]
fn register_is_idempotent() {
    let mut api = OpenApi::default();

    let added = register(&mut api);
    assert_eq!(added, init().len());
    let first = schema_names(&api);

    assert_eq!(register(&mut api), 0);
    assert_eq!(schema_names(&api), first);
}

#[test]
fn built_document_carries_routes_and_schemas() {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let (_, api) = build(state);

    for path in ["/health", "/api/v1/access/roles", "/api/v1/access/scopes", "/api/v1/access/scopes/{scope}", "/api/v1/access/check"] {
        assert!(api.paths.paths.contains_key(path), "undocumented path {path}");
    }
    let names = schema_names(&api);
    assert!(names.iter().any(|name| name == "ChangelogEntry"));
    assert!(names.iter().any(|name| name == "PermissionCheckRequest"));
}

#[test]
fn state_rejects_inverted_page_limits() {
    let mut config = ApiConfig::default();
    config.api.default_page_size = 500;
    assert!(ApiState::builder().config(config).build().is_err());
    assert!(ApiState::builder().build().is_err());
}
