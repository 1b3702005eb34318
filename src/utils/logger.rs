use crate::utils::config::get_env_or_default;
use once_cell::sync::OnceCell;
use tracing::Level;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber
///
/// The level is taken from the `LOGLEVEL` environment variable
/// (`trace`, `debug`, `info`, `warn` or `error`; default `info`).
/// Safe to call more than once; only the first call installs the subscriber.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let level = match get_env_or_default("LOGLEVEL", String::from("info"))
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
    });
}
