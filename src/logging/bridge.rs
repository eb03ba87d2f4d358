//! Adapters routing `log` records and `tracing` events into a [`Logger`]
//!
//! Both adapters hold a `&'static Logger`, normally [`crate::logger()`].
//! Diagnostics this crate emits under the `logfacade` target are never
//! forwarded. Neither is anything a sink's writer logs while it is writing
//! a record, so a chatty transport cannot feed back into itself.

use super::logger::Logger;
use super::output::writing_on_this_thread;
use super::types::Level;
use crate::INTERNAL_TARGET;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

fn is_internal(target: &str) -> bool {
    target == INTERNAL_TARGET || writing_on_this_thread()
}

/// `log::Log` implementation forwarding to a [`Logger`]
#[derive(Debug, Clone, Copy)]
pub struct LogBridge {
    logger: &'static Logger,
}

impl LogBridge {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }

    /// Register as the `log` crate's global logger.
    ///
    /// Filtering is left to the facade's threshold, which may change at
    /// runtime, so the `log` max level is opened fully.
    pub fn install(logger: &'static Logger) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(log::LevelFilter::Trace);
        tracing::debug!(target: INTERNAL_TARGET, "log bridge installed");
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        !is_internal(metadata.target()) && self.logger.enabled(Level::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger.log(Level::from(record.level()), *record.args());
    }

    fn flush(&self) {}
}

/// `tracing_subscriber` layer forwarding events to a [`Logger`].
///
/// The event's `message` becomes the record text; every other field is
/// appended as `key=value` in the order the call site declared it.
#[derive(Debug, Clone, Copy)]
pub struct FacadeLayer {
    logger: &'static Logger,
}

impl FacadeLayer {
    pub fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for FacadeLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_internal(metadata.target()) {
            return;
        }

        let level = Level::from(*metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);
        self.logger.log_fields(level, &visitor.message, &visitor.fields);
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}
