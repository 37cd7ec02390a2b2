//! Tracing subscriber setup for hosts embedding the interaction core.

use crate::settings::Settings;
use anyhow::Context as _;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Format;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Only the first successful
/// call installs anything; later calls return `Ok(())`.
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    INIT.get_or_try_init(|| install(default_filter)).map(|_| ())
}

/// Install the global subscriber with the filter from `settings`.
pub fn init_from(settings: &Settings) -> anyhow::Result<()> {
    init(&settings.log_filter)
}

fn install(default_filter: &str) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid RUST_LOG directive `{directives}`"))?,
        _ => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter `{default_filter}`"))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().without_time())
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::info!("Logging configured");
    Ok(())
}
