/// `OpenAPI` tag of operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag of the access model endpoints.
pub const ACCESS_TAG: &str = "Access";

pub const API_PREFIX: &str = "/api/v1";

/// Prefix of environment overrides, e.g. `CHANGELOG__SERVER__PORT`.
pub const ENV_PREFIX: &str = "CHANGELOG";
/// Config file loaded when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";
