//! Leveled logging and value dumps
//!
//! This module is organized into submodules:
//! - `types`: severity levels
//! - `output`: sinks log lines are written to
//! - `formatter`: colorized text line rendering
//! - `logger`: the [`Logger`] itself and its builder
//! - `dump`: bannered JSON and structural dumps
//! - `config`: serde/env configuration
//! - `bridge`: adapters for the `log` and `tracing` ecosystems
//! - `macros`: global-style logging macros

pub mod bridge;
pub mod config;
mod dump;
pub mod formatter;
pub mod logger;
mod macros;
pub mod output;
pub mod types;

pub use bridge::{FacadeLayer, LogBridge};
pub use config::{LoggerConfig, OutputTarget};
pub use formatter::TextFormatter;
pub use logger::{ErrorHook, Logger, LoggerBuilder};
pub use output::{MemoryOutput, Output};
pub use types::Level;
