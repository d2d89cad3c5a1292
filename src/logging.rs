use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One JSON object per line, for log collectors
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(
            std::env::var(crate::config::ENV_LOG_FORMAT)
                .ok()
                .as_deref(),
        )
    }

    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber writing to stdout.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// lifetime of the process.
pub fn init(format: LogFormat) -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Pretty => registry
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .try_init()?,
    }

    Ok(guard)
}
