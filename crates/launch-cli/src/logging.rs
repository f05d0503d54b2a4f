use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `AGENT_LAUNCH_LOG=debug`.
pub const LOG_ENV_VAR: &str = "AGENT_LAUNCH_LOG";

/// Initialize a tracing subscriber writing to stderr.
///
/// The filter comes from [`LOG_ENV_VAR`], defaulting to `error` so that the
/// service's own output is not interleaved with launcher logs. Operator
/// messages are printed separately and are not affected.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_env(LOG_ENV_VAR).or_else(|_| EnvFilter::try_new("error"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
