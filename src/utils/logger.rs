use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    /// Structured output for hosts that ship logs to a collector.
    Json,
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "sparkle_inquiry=debug,info"
    } else {
        "sparkle_inquiry=info"
    }
}

// 共用的輸出設定：不顯示 target、thread、檔名與行號
fn fmt_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_logger(verbose: bool, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let (compact, json) = match format {
        LogFormat::Compact => (Some(fmt_layer().compact()), None),
        LogFormat::Json => (None, Some(fmt_layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
