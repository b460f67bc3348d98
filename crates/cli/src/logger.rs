/// Define log format used
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Basic,
    Pretty,
    Json,
}

/// Initializing logging facilities
///
/// Log filtering is configured with env vars in this priority order:
/// - `CHAT0_LOG` env variable, formatted for [tracing_subscriber::EnvFilter]
/// - `RUST_LOG` "standard" env variable, also formatted for [tracing_subscriber::EnvFilter]
/// - `info` for the chat0 crates, so the configuration dump is visible
///
/// Logs are written to stderr, stdout is kept for command output.
pub fn init(log_format: LogFormat) {
    use std::env;

    use tracing::Level;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let fmt_layer = match log_format {
        LogFormat::Basic => fmt_layer.boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    let filter_layer = {
        let directives = env::var("CHAT0_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| "chat0_config=info,chat0=info".to_string());

        EnvFilter::builder()
            .with_default_directive(Level::WARN.into())
            .parse_lossy(directives)
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
