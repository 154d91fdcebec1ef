//! Logger initialization.
//!
//! Console logging based on `tracing-subscriber`, driven by the `[logger]`
//! settings section: an env-filter style level string, optional JSON
//! output and color control.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggerSettings;

/// Initialize the global logger with the given settings
///
/// # Errors
/// Returns an error if the level string is not a valid filter directive,
/// or if a global subscriber is already installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.level)
        .map_err(|error| anyhow::anyhow!("invalid logger.level '{}': {error}", settings.level))?;

    if settings.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).json())
            .try_init()?;
    } else {
        let is_tty = std::io::stdout().is_terminal();
        let use_ansi = settings.colored && is_tty;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?;
    }

    Ok(())
}
