use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};
use super::{LogConfig, LOG_FILENAME};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jira_link_map={level}")))
}

fn stderr_layer(config: &LogConfig) -> BoxedLayer {
    if config.json_format {
        fmt::layer()
            .json().with_writer(std::io::stderr).with_current_span(true).with_target(true)
            .with_filter(env_filter(config.log_level)).boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr).with_target(true).with_ansi(true)
            .with_filter(env_filter(config.log_level)).boxed()
    }
}

fn file_layer(config: &LogConfig) -> Result<Option<BoxedLayer>> {
    let Some(log_dir) = &config.log_dir else {
        return Ok(None);
    };
    std::fs::create_dir_all(log_dir)?;
    let file_appender = RollingFileAppender::new(config.rotation.clone(), log_dir, LOG_FILENAME);
    let layer = if config.json_format {
        fmt::layer()
            .json().with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true)
            .with_filter(env_filter(config.log_level)).boxed()
    } else {
        fmt::layer()
            .with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_target(true).with_ansi(false)
            .with_filter(env_filter(config.log_level)).boxed()
    };
    Ok(Some(layer))
}

/// Initialize the logging system with the given configuration.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let mut layers = vec![stderr_layer(config)];
    if let Some(layer) = file_layer(config)? {
        layers.push(layer);
    }
    tracing_subscriber::registry()
        .with(layers)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Parse rotation period from string.
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
