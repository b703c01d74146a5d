mod log_level;

pub use log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// General configuration settings for the daemon.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Logging level, overridden by `RUST_LOG` and `--verbose`.
    #[serde(default)]
    pub log_level: LogLevel,
}
