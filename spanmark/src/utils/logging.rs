use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "SPANMARK_LOG";
pub const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber. Stdout is reserved for the rendered lines.
///
/// Keep the returned guard alive until exit or buffered records are lost.
pub fn init() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let layer = fmt::layer()
        .with_writer(writer)
        .with_timer(ChronoLocal::rfc_3339())
        .with_target(false);

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(std::env::var(LOG_ENV).ok()))
        .with(layer)
        .try_init();

    guard
}

fn build_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
