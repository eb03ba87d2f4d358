//! Process-wide default logger
//!
//! The default instance is created on first use with stdout as its sink and
//! `Info` as its threshold. These free functions operate on it; the variadic
//! calls are available as macros (`logfacade::infof!` and friends).

use crate::logging::{Level, Logger, Output};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt::{Debug, Display};

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Replace the default logger's sink
pub fn set_output(output: impl Into<Output>) {
    logger().set_output(output);
}

/// Handle to the default logger's current sink
pub fn output() -> Output {
    logger().output()
}

/// Switch the default logger between `Debug` and `Info`
pub fn set_debug(enabled: bool) {
    logger().set_debug(enabled);
}

/// Set the default logger's threshold
pub fn set_level(level: Level) {
    logger().set_level(level);
}

pub fn level() -> Level {
    logger().level()
}

/// Log `script error [<name>]: <msg>` at `Error`
pub fn log_script_error(name: &str, msg: impl Display) {
    logger().log_script_error(name, msg);
}

/// Log `script warn [<name>]: <msg>` at `Warn`
pub fn log_script_warn(name: &str, msg: impl Display) {
    logger().log_script_warn(name, msg);
}

/// Write `value` as indented JSON between dump banners.
///
/// # Panics
///
/// Panics if `value` cannot be encoded as JSON.
pub fn dump_json<T: Serialize + ?Sized>(descr: &str, value: &T) {
    logger().dump_json(descr, value);
}

/// [`dump_json`] when debug output is enabled
pub fn ddump_json<T: Serialize + ?Sized>(descr: &str, value: &T) {
    logger().ddump_json(descr, value);
}

/// Write a structural dump of `value` between dump banners
pub fn dump<T: Debug + ?Sized>(descr: &str, value: &T) {
    logger().dump(descr, value);
}

/// [`dump`] when debug output is enabled
pub fn ddump<T: Debug + ?Sized>(descr: &str, value: &T) {
    logger().ddump(descr, value);
}

/// Decode `raw` as JSON and [`ddump`] it when debug output is enabled.
///
/// # Panics
///
/// Panics if debug output is enabled and `raw` is not valid JSON.
pub fn ddump_unmarshaled(descr: &str, raw: &[u8]) {
    logger().ddump_unmarshaled(descr, raw);
}
