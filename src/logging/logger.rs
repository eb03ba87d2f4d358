//! The logger behind the facade

use super::config::{LoggerConfig, OutputTarget};
use super::formatter::{self, TextFormatter};
use super::output::Output;
use super::types::Level;
use crate::INTERNAL_TARGET;
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::io;
use std::sync::Arc;

/// Observer notified when the sink rejects a write.
pub type ErrorHook = Arc<dyn Fn(&io::Error) + Send + Sync>;

/// Leveled logger writing colorized text lines to a replaceable sink.
///
/// Output and level can be changed at any time from any thread; each is
/// guarded by its own lock, and a call observes whichever value was current
/// when it started. Writes are best-effort: a failing sink never surfaces as
/// an error to the caller, only to the optional [`ErrorHook`].
pub struct Logger {
    output: RwLock<Output>,
    level: RwLock<Level>,
    formatter: TextFormatter,
    error_hook: RwLock<Option<ErrorHook>>,
}

impl Logger {
    /// Logger writing to stdout at `Info`
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        let output = match config.target {
            OutputTarget::Stdout => Output::stdout(),
            OutputTarget::Stderr => Output::stderr(),
        };

        Self::builder()
            .output(output)
            .level(config.level)
            .colors(config.colors)
            .build()
    }

    // ==================== Configuration ====================

    /// Replace the sink. Records already being written finish on the old one.
    pub fn set_output(&self, output: impl Into<Output>) {
        *self.output.write() = output.into();
    }

    pub fn output(&self) -> Output {
        self.output.read().clone()
    }

    /// `true` lowers the threshold to `Debug`, `false` resets it to `Info`
    pub fn set_debug(&self, enabled: bool) {
        self.set_level(if enabled { Level::Debug } else { Level::Info });
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.level() <= Level::Debug
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Whether a call at `level` would reach the sink
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn formatter(&self) -> TextFormatter {
        self.formatter
    }

    pub fn set_error_hook<F>(&self, hook: F)
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        *self.error_hook.write() = Some(Arc::new(hook));
    }

    pub fn clear_error_hook(&self) {
        *self.error_hook.write() = None;
    }

    // ==================== Core ====================

    /// Emit a formatted record at `level` if it passes the threshold
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        match args.as_str() {
            Some(message) => self.write_record(level, message, &[]),
            None => self.write_record(level, &args.to_string(), &[]),
        }
    }

    /// Emit the space-joined operands at `level` if it passes the threshold
    pub fn log_args(&self, level: Level, args: &[&dyn Display]) {
        if !self.enabled(level) {
            return;
        }
        self.write_record(level, &formatter::join(args), &[]);
    }

    /// Emit a record carrying `key=value` fields, kept in the given order
    pub fn log_fields(&self, level: Level, message: &str, fields: &[(String, String)]) {
        if !self.enabled(level) {
            return;
        }
        self.write_record(level, message, fields);
    }

    fn write_record(&self, level: Level, message: &str, fields: &[(String, String)]) {
        let line = self
            .formatter
            .format_with_fields(level, message, fields);
        self.write_raw(line.as_bytes());
    }

    /// Write bytes to the current sink, bypassing level and formatting
    pub(crate) fn write_raw(&self, bytes: &[u8]) {
        let output = self.output();
        if let Err(err) = output.write_all(bytes) {
            self.report_write_error(&err);
        }
    }

    fn report_write_error(&self, err: &io::Error) {
        tracing::debug!(target: INTERNAL_TARGET, error = %err, "log output write failed");

        let hook = self.error_hook.read().clone();
        if let Some(hook) = hook {
            hook(err);
        }
    }

    // ==================== Leveled logging ====================

    /// Log the operands at `Debug`
    pub fn debug(&self, args: &[&dyn Display]) {
        self.log_args(Level::Debug, args);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn debugln(&self, args: &[&dyn Display]) {
        self.log_args(Level::Debug, args);
    }

    /// Log the operands at `Info`
    pub fn info(&self, args: &[&dyn Display]) {
        self.log_args(Level::Info, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn infoln(&self, args: &[&dyn Display]) {
        self.log_args(Level::Info, args);
    }

    /// Log the operands at `Warn`
    pub fn warn(&self, args: &[&dyn Display]) {
        self.log_args(Level::Warn, args);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    pub fn warnln(&self, args: &[&dyn Display]) {
        self.log_args(Level::Warn, args);
    }

    /// Alias of [`Logger::warn`]
    pub fn warning(&self, args: &[&dyn Display]) {
        self.warn(args);
    }

    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.warnf(args);
    }

    pub fn warningln(&self, args: &[&dyn Display]) {
        self.warnln(args);
    }

    /// Log the operands at `Error`
    pub fn error(&self, args: &[&dyn Display]) {
        self.log_args(Level::Error, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    pub fn errorln(&self, args: &[&dyn Display]) {
        self.log_args(Level::Error, args);
    }

    /// Log at `Panic`, then panic with the same message.
    ///
    /// The panic unwinds like any other and can be caught with
    /// [`std::panic::catch_unwind`]. Use the `fatal` family to end the
    /// process instead.
    pub fn panic(&self, args: &[&dyn Display]) -> ! {
        self.raise(formatter::join(args))
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.raise(args.to_string())
    }

    pub fn panicln(&self, args: &[&dyn Display]) -> ! {
        self.raise(formatter::join(args))
    }

    fn raise(&self, message: String) -> ! {
        self.write_record(Level::Panic, &message, &[]);
        panic!("{}", message)
    }

    /// Log at `Fatal`, then exit the process with status 1.
    ///
    /// This is an immediate exit of the whole process: no destructors run,
    /// other threads are not joined and the panic machinery is not involved.
    pub fn fatal(&self, args: &[&dyn Display]) -> ! {
        self.terminate(formatter::join(args))
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(args.to_string())
    }

    pub fn fatalln(&self, args: &[&dyn Display]) -> ! {
        self.terminate(formatter::join(args))
    }

    fn terminate(&self, message: String) -> ! {
        self.write_record(Level::Fatal, &message, &[]);
        std::process::exit(1)
    }

    // ==================== Raw output ====================

    /// Write the operands back to back, ungated and unformatted
    pub fn print(&self, args: &[&dyn Display]) {
        self.write_raw(formatter::concat(args).as_bytes());
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.write_raw(text.as_bytes()),
            None => self.write_raw(args.to_string().as_bytes()),
        }
    }

    /// Write the space-joined operands and a newline, ungated and unformatted
    pub fn println(&self, args: &[&dyn Display]) {
        let mut line = formatter::join(args);
        line.push('\n');
        self.write_raw(line.as_bytes());
    }

    // ==================== Script helpers ====================

    pub fn log_script_error(&self, name: &str, msg: impl Display) {
        self.errorf(format_args!("script error [{}]: {}", name, msg));
    }

    pub fn log_script_warn(&self, name: &str, msg: impl Display) {
        self.warnf(format_args!("script warn [{}]: {}", name, msg));
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("output", &*self.output.read())
            .field("level", &self.level())
            .field("formatter", &self.formatter)
            .field("error_hook", &self.error_hook.read().is_some())
            .finish()
    }
}

/// Builder for [`Logger`]
#[derive(Default)]
pub struct LoggerBuilder {
    output: Option<Output>,
    level: Level,
    formatter: TextFormatter,
    error_hook: Option<ErrorHook>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(mut self, output: impl Into<Output>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn debug(self, enabled: bool) -> Self {
        self.level(if enabled { Level::Debug } else { Level::Info })
    }

    pub fn colors(mut self, colors: bool) -> Self {
        self.formatter = self.formatter.with_colors(colors);
        self
    }

    pub fn error_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&io::Error) + Send + Sync + 'static,
    {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            output: RwLock::new(self.output.unwrap_or_default()),
            level: RwLock::new(self.level),
            formatter: self.formatter,
            error_hook: RwLock::new(self.error_hook),
        }
    }
}
