//! Tracing initialization.
//!
//! Configures the `tracing` subscriber pipeline: an `EnvFilter` built from the
//! configured level string and an fmt layer writing to stderr. The library
//! itself only emits through the `tracing` macros; embedders that already
//! install their own subscriber simply skip this module.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber from configuration.
///
/// The filter level is taken from `config.trace_level`, defaulting to
/// `"info"`. Idempotent: safe to call more than once, only the first
/// initialization takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
