use changelog_domain::config::ApiConfig;
use changelog_domain::constants::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Custom error type for config loading.
#[changelog_derive::app_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays environment overrides.
///
/// 1. **Base file**: `path`, or `server` (any supported extension) in the working
///    directory when `None`.
/// 2. **Environment**: variables prefixed with `CHANGELOG__`, nested with `__`
///    (`CHANGELOG__SERVER__PORT` maps to `server.port`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or its content does not
/// match `T`.
///
/// # Example
/// ```rust
/// use changelog_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    build(&config_path(path), true)
}

/// Loads the service configuration.
///
/// An explicit `path` must exist. Without one, the default `server` file is optional and
/// missing values fall back to [`ApiConfig::default`].
///
/// # Errors
/// Returns [`ConfigError::Config`] when a file cannot be read or parsed.
pub fn load_api_config(path: Option<impl AsRef<Path>>) -> Result<ApiConfig, ConfigError> {
    let required = path.is_some();
    build(&config_path(path), required)
}

/// The file the loaders read for `path`: the path itself, or the default `server` base
/// name.
#[must_use]
pub fn config_path(path: Option<impl AsRef<Path>>) -> PathBuf {
    path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf())
}

fn build<T>(path: &Path, required: bool) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    debug!(path = %path.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
