//! # logfacade
//!
//! A process-wide logging facade: leveled logging with colorized,
//! timestamp-free text lines, raw unconditional output, and bannered dumps of
//! structured values.
//!
//! ## Features
//!
//! - **Leveled logging**: debug, info, warn, error, panic and fatal, each in
//!   formatted, plain and line variants
//! - **Replaceable sink**: redirect output to any `Write` at runtime
//! - **Value dumps**: indented JSON or structural `Debug` dumps framed by
//!   start/end banners, optionally gated on debug output
//! - **Bridges**: route `log` records and `tracing` events into the facade
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logfacade::{Level, Logger, MemoryOutput};
//!
//! // Global-style usage
//! logfacade::set_debug(true);
//! logfacade::infof!("listening on {}", 8080);
//! logfacade::log_script_warn("init.lua", "deprecated call");
//! logfacade::ddump_json("config", &serde_json::json!({"workers": 4}));
//!
//! // An explicit instance, e.g. for tests
//! let captured = MemoryOutput::new();
//! let logger = Logger::builder()
//!     .output(captured.clone())
//!     .level(Level::Warn)
//!     .colors(false)
//!     .build();
//! logger.warnf(format_args!("disk at {}%", 91));
//! assert_eq!(captured.contents(), "WARN disk at 91%\n");
//! ```
//!
//! ## Termination
//!
//! The `panic` family logs and then unwinds with the same message. The
//! `fatal` family logs and then exits the process with status 1, without
//! running destructors.

#![warn(clippy::all)]

pub mod error;
mod global;
pub mod logging;

/// Target used for this crate's own `tracing` diagnostics.
pub(crate) const INTERNAL_TARGET: &str = "logfacade";

pub use error::{LogError, Result};
pub use global::{
    ddump, ddump_json, ddump_unmarshaled, dump, dump_json, level, log_script_error,
    log_script_warn, logger, output, set_debug, set_level, set_output,
};
pub use logging::{
    ErrorHook, FacadeLayer, Level, LogBridge, Logger, LoggerBuilder, LoggerConfig, MemoryOutput,
    Output, OutputTarget, TextFormatter,
};
