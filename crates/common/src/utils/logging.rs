use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Human-readable logs for local runs of the league server.
/// - `RUST_LOG` overrides the filter
/// - Default keeps request spans from `tower_http` and store start-up at info,
///   so each request line shows method, path, status and latency
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event, selected with `LOG_FORMAT=json`.
/// - `RUST_LOG` overrides the filter
/// - Default raises the `service` crate to debug so every persisted win
///   (player, new total, bytes written) lands in the machine-readable stream
pub fn init_logging_json() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,service=debug"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
