use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default directives when neither `RUST_LOG` nor a configured filter is present.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";

fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_FILTER)))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to [`DEFAULT_FILTER`]
pub fn init_logging_default() {
    init_logging(false, None);
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json() {
    init_logging(true, None);
}

/// Initialize logging from explicit settings (usually the `[log]` config section).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(json: bool, filter: Option<&str>) {
    let builder = fmt()
        .with_env_filter(env_filter(filter))
        .with_target(false)
        .with_writer(io::stdout);
    // 重复初始化（例如测试中）直接忽略
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
