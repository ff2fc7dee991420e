//! Tracing subscriber for the `solara-imaging` binary.
//!
//! Library crates only emit spans and events; this is the one place a
//! global subscriber is installed. Output goes to stderr because stdout
//! carries the resulting filename.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        "info".to_string(),
        if is_dev { "sl_app=debug" } else { "sl_app=info" }.to_string(),
        if is_dev {
            "sl_infra=debug"
        } else {
            "sl_infra=info"
        }
        .to_string(),
        "reqwest=warn".to_string(),
        "hyper_util=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// Respects `RUST_LOG`; falls back to [`build_filter_directives`].
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;
    Ok(())
}
