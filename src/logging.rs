use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug`.
pub const LOG_ENV: &str = "TIMEREG_PROMPT_LOG";

/// Install a stderr subscriber. Logging is off unless `TIMEREG_PROMPT_LOG`
/// is set, since anything written here lands in the user's prompt.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
