//! Tracing and logging (shared setup).

/// Observability configuration (env / JSON).
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. A malformed
/// environment falls back to the defaults and is reported once the subscriber is up.
pub fn init() {
    let (config, problem) = resolve(ObservabilityConfig::from_env());
    tracing::init(&config);

    if let Some(err) = problem {
        ::tracing::warn!("invalid observability environment, using defaults: {err:#}");
    }
}

/// Settings to install, plus the configuration error that forced the defaults.
fn resolve(
    loaded: anyhow::Result<ObservabilityConfig>,
) -> (ObservabilityConfig, Option<anyhow::Error>) {
    match loaded {
        Ok(config) => (config, None),
        Err(err) => (ObservabilityConfig::default(), Some(err)),
    }
}

/// Initialize process-wide observability with explicit settings.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    tracing::init(config)
}
