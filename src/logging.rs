use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `log` records, such as actix-web's request
/// log, are forwarded to it as well.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|e| {
        eprintln!("Invalid LOG_LEVEL {:?} ({}), falling back to info", log_level, e);
        EnvFilter::new("info")
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
    {
        eprintln!("Tracing subscriber already installed: {}", e);
    }
}
