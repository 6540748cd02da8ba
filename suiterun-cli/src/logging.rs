//! Logging initialization for suiterun.
//!
//! Configures `tracing-subscriber` based on the `[general]` section
//! of `SuiteConfig`. Diagnostics always go to stderr so they never
//! interleave with the plain progress lines on stdout.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use suiterun_core::config::GeneralConfig;

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before the run starts.
/// `RUST_LOG` takes precedence over `config.log_level`.
/// Write failures on stderr are dropped rather than reported.
///
/// # Formats
///
/// * `"pretty"` - Human-readable output (default)
/// * `"json"` - Machine-parseable JSON lines (for CI log collectors)
pub fn init_tracing(config: &GeneralConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .log_internal_errors(false),
                )
                .try_init()
                .map_err(|e| {
                    anyhow::anyhow!("failed to initialize JSON tracing subscriber: {}", e)
                })?;
        }
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr)
                        .log_internal_errors(false),
                )
                .try_init()
                .map_err(|e| {
                    anyhow::anyhow!("failed to initialize pretty tracing subscriber: {}", e)
                })?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "unknown log format '{}', expected 'pretty' or 'json'",
                config.log_format
            ));
        }
    }

    Ok(())
}
