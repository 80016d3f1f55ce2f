//! Tracing initialization for the binary.
//!
//! Output goes to the console through the `tracing-subscriber` fmt layer. Verbosity is
//! controlled with `RUST_LOG` and defaults to `info`, e.g. `RUST_LOG=gcse_client=debug` logs
//! every request the executor sends.

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");
    Ok(())
}
