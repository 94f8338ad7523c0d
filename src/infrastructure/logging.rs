//! Logging setup on top of the `tracing` crate
//!
//! The library only emits events; binaries decide where they go by calling
//! one of the `init_*` functions once at startup.

use crate::frontend::config::{LogStyle, LoggingConfig};
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::Level;
use tracing_appender::{non_blocking::{NonBlocking, WorkerGuard}, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, multi-line
    Pretty,
    /// Single line per event
    Compact,
    /// One JSON object per event
    Json,
}

/// Log output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    /// Daily rotated file
    File { directory: String, prefix: String },
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Emit span open/close events
    pub span_events: bool,
    /// Extra filter directives, e.g. "heightwise=trace"
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
            output: LogOutput::Stderr,
            span_events: false,
            filter: None,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Build from the `[logging]` table of a config file.
    pub fn from_settings(settings: &LoggingConfig) -> Self {
        let level = parse_level(&settings.level).unwrap_or(Level::WARN);
        let format = match settings.format {
            LogStyle::Pretty => LogFormat::Pretty,
            LogStyle::Compact => LogFormat::Compact,
            LogStyle::Json => LogFormat::Json,
        };

        Self::default().with_level(level).with_format(format)
    }
}

pub fn parse_level(level: &str) -> Option<Level> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Install the global subscriber.
///
/// Returns the `WorkerGuard` that flushes buffered events on drop; keep it alive
/// until the program exits. Returns `None` if logging was already initialized.
pub fn init_logging(config: LogConfig) -> Option<WorkerGuard> {
    if LOGGER_INITIALIZED.set(()).is_err() {
        return None;
    }

    let (writer, guard) = match &config.output {
        LogOutput::Stderr => tracing_appender::non_blocking(std::io::stderr()),
        LogOutput::File { directory, prefix } => {
            tracing_appender::non_blocking(rolling::daily(directory, prefix))
        }
    };

    let layer = build_layer::<tracing_subscriber::Registry>(writer, &config);
    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        // Another subscriber was installed outside this module
        return None;
    }

    Some(guard)
}

fn build_layer<S>(writer: NonBlocking, config: &LogConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let filter = build_filter(config);
    let spans = span_events_config(config.span_events);
    let base = fmt::layer().with_writer(writer).with_span_events(spans);

    match config.format {
        LogFormat::Pretty => base.pretty().with_filter(filter).boxed(),
        LogFormat::Compact => base.compact().with_filter(filter).boxed(),
        LogFormat::Json => base.json().with_filter(filter).boxed(),
    }
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let base_filter = EnvFilter::from_default_env()
        .add_directive(config.level.into());

    match &config.filter {
        Some(filter_str) => {
            filter_str.split(',')
                .fold(base_filter, |filter, directive| {
                    filter.add_directive(directive.parse().unwrap_or_else(|_| {
                        tracing::warn!("Invalid filter directive: {}", directive);
                        config.level.into()
                    }))
                })
        }
        None => base_filter,
    }
}

fn span_events_config(enabled: bool) -> FmtSpan {
    if enabled {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

/// Logging for the command-line tool: warnings only unless `verbose`.
pub fn init_cli_logging(settings: &LoggingConfig, verbose: bool) -> Option<WorkerGuard> {
    let config = LogConfig::from_settings(settings);
    let config = if verbose {
        config.with_level(Level::DEBUG).with_filter("heightwise=debug")
    } else {
        config
    };

    init_logging(config)
}

/// JSON logs into a daily rotated `heightwise.<date>` file under `log_dir`.
pub fn init_file_logging(log_dir: impl AsRef<Path>, verbose: bool) -> Option<WorkerGuard> {
    init_logging(file_log_config(log_dir.as_ref(), verbose))
}

fn file_log_config(log_dir: &Path, verbose: bool) -> LogConfig {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    LogConfig::new()
        .with_level(level)
        .with_format(LogFormat::Json)
        .with_output(LogOutput::File {
            directory: log_dir.to_string_lossy().to_string(),
            prefix: "heightwise".to_string(),
        })
        .with_filter(format!("heightwise={}", level).to_lowercase())
}
