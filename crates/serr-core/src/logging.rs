//! Logging initialization using the `tracing` ecosystem.
//!
//! Installs a console layer plus an optional daily-rotating file layer. The
//! configured level is a fallback: `RUST_LOG` wins when set.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Initialize the global tracing subscriber.
///
/// Call once at program start. A [`TracingSink`](crate::TracingSink) produces
/// no output until this (or another subscriber) is installed.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.json)];
    if let Some(dir) = &config.dir {
        let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
        layers.push(file_layer(appender, config.json));
    }

    tracing_subscriber::registry().with(layers).with(env_filter).init();
}

fn console_layer(json: bool) -> BoxedLayer {
    if json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).with_thread_ids(true).with_ansi(true).boxed()
    }
}

fn file_layer(appender: tracing_appender::rolling::RollingFileAppender, json: bool) -> BoxedLayer {
    if json {
        fmt::layer().json().with_writer(appender).with_target(true).boxed()
    } else {
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .boxed()
    }
}
