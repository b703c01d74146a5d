use std::{env, error::Error, io};

use tracing::level_filters::LevelFilter;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::Directive, fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{ConfigPaths, LogLevel};

const LOG_FILES_KEPT: usize = 7;
const FORMAT_VAR: &str = "GROOVED_LOG_FORMAT";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var(FORMAT_VAR).as_deref() {
            Ok("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

fn filter(default: impl Into<Directive>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Initialize tracing for the daemon
///
/// Events go to stdout and to a daily rotated file under
/// `~/.grooved/logs`. `RUST_LOG` takes precedence over `level`. Set
/// `GROOVED_LOG_FORMAT=json` for JSON lines on both outputs.
///
/// Keep the returned guard alive until exit; dropping it flushes the file.
///
/// # Errors
/// Returns error if the log directory cannot be created or a global
/// subscriber is already installed
pub fn init_daemon(level: LogLevel) -> Result<WorkerGuard, Box<dyn Error>> {
    let appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(LOG_FILES_KEPT)
        .filename_prefix("grooved")
        .filename_suffix("log")
        .build(ConfigPaths::log_dir()?)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let outputs: BoxedLayer = match LogFormat::from_env() {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(io::stdout)
            .and_then(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(file_writer),
            )
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_writer(io::stdout)
            .and_then(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_writer(file_writer),
            )
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(outputs)
        .with(filter(LevelFilter::from(level)))
        .try_init()?;

    Ok(guard)
}

/// Initialize tracing for `groovectl`
///
/// Warnings only, on stderr, so command output on stdout stays clean.
/// `RUST_LOG` overrides the level.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(filter(LevelFilter::WARN))
        .try_init()?;

    Ok(())
}
