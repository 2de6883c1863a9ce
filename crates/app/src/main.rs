//! Development harness for the console core
//!
//! In production the core is embedded behind a webview UI that feeds it
//! navigation events. This harness stands in for that embedding: it wires
//! the full context and reads navigation URLs line by line from stdin, so
//! a redirect can be replayed by pasting its URL.

use anyhow::Context as _;
use lumen_app::AppContext;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = lumen_infra::config::load().context("failed to load configuration")?;
    info!(backend = %config.backend.base_url, "starting console core");

    let ctx = AppContext::initialize(config).context("failed to initialize application")?;
    let exchange_loop = ctx.spawn_exchange_loop();

    info!("reading navigation URLs from stdin (one per line, EOF to quit)");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        if let Err(err) = ctx.handle_navigation(url) {
            warn!(error = %err, "ignoring invalid navigation");
        }
    }

    drop(ctx);
    exchange_loop.await.context("exchange loop panicked")?;
    Ok(())
}
