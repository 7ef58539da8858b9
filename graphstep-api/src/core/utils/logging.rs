use std::sync::Once;
use tracing_subscriber::{
    fmt, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

static INIT: Once = Once::new();

pub fn get_log_env(log_level: String) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "graphstep={},graphstep_api={},graphstep_cli={},graphstep_benchmark={}",
            log_level, log_level, log_level, log_level
        ))
    })
}

/// Installs the global subscriber with `filter`. Only the first call in a
/// process has any effect.
pub fn init_logger_with_filter(filter: EnvFilter) {
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_span_events(FmtSpan::NONE));
        if let Err(err) = subscriber.try_init() {
            eprintln!("Failed to initialise the global logger: {err}");
        }
    });
}

pub fn init_global_logger(log_level: String) {
    init_logger_with_filter(get_log_env(log_level))
}

pub fn global_info_logger() {
    init_global_logger("INFO".to_string())
}
