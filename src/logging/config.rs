//! Logger configuration

use super::types::Level;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding a level name (`debug`, `info`, `warning`, ...)
pub const LEVEL_ENV: &str = "LOGFACADE_LEVEL";
/// Environment variable forcing debug output when set to `true` or `1`
pub const DEBUG_ENV: &str = "LOGFACADE_DEBUG";

/// Standard stream a configured logger writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Construction options for a [`Logger`](super::Logger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum level that reaches the sink
    pub level: Level,
    /// Colorize level tags
    pub colors: bool,
    /// Where records go
    pub target: OutputTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::Info,
            colors: true,
            target: OutputTarget::Stdout,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `LOGFACADE_LEVEL` and `LOGFACADE_DEBUG`
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// Unparsable level names are ignored. A truthy debug flag wins over
    /// any level name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LEVEL_ENV).and_then(|v| v.parse::<Level>().ok()) {
            self.level = level;
        }

        let debug = lookup(DEBUG_ENV)
            .map(|v| v.trim().to_lowercase())
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        if debug {
            self.level = Level::Debug;
        }

        self
    }
}
