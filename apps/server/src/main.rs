//! `changelog-server [CONFIG]`
//!
//! Loads `CONFIG` (default: `server.*` in the working directory, optional) with
//! `CHANGELOG__` environment overrides, then serves until interrupted.

use anyhow::Context;
use changelog::kernel::config::{config_path, load_api_config};
use changelog_logger::Logger;
use changelog_server::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let arg = std::env::args_os().nth(1);
    let cfg = load_api_config(arg.as_ref()).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;
    info!(path = %config_path(arg.as_ref()).display(), explicit = arg.is_some(), "Configuration loaded");

    Server::builder().config(cfg).build()?.run().await
}
