//! Bannered value dumps
//!
//! A dump is written as a single block:
//!
//! ```text
//! <descr> ------------------------- dump start ---------------------------------------
//! <body>
//! <descr> -------------------------  dump end  ---------------------------------------
//!
//! ```
//!
//! `dump_json` and `dump` are unconditional; the `d`-prefixed variants only
//! write when the logger is at `Debug`.

use super::logger::Logger;
use crate::error::{LogError, Result};
use serde::Serialize;
use std::fmt::Debug;

const DUMP_START: &str =
    " ------------------------- dump start ---------------------------------------\n";
const DUMP_END: &str =
    " -------------------------  dump end  ---------------------------------------\n\n";

const MARSHAL_PANIC: &str = "DumpJSON: unable to marshal input";
const UNMARSHAL_PANIC: &str = "DumpUnmarshaled: unable to unmarshal input";

impl Logger {
    /// Write `value` as indented JSON between dump banners.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be encoded as JSON. Nothing is written in
    /// that case.
    pub fn dump_json<T: Serialize + ?Sized>(&self, descr: &str, value: &T) {
        if self.try_dump_json(descr, value).is_err() {
            panic!("{}", MARSHAL_PANIC);
        }
    }

    pub fn try_dump_json<T: Serialize + ?Sized>(&self, descr: &str, value: &T) -> Result<()> {
        let body = serde_json::to_string_pretty(value).map_err(LogError::Serialize)?;
        self.write_dump(descr, &body);
        Ok(())
    }

    /// [`Logger::dump_json`] when debug output is enabled, otherwise nothing
    pub fn ddump_json<T: Serialize + ?Sized>(&self, descr: &str, value: &T) {
        if !self.is_debug_enabled() {
            return;
        }
        self.dump_json(descr, value);
    }

    /// Write a structural dump of `value` between dump banners.
    ///
    /// The body names the value's type, followed by its pretty-printed
    /// `Debug` form with every field and nested value.
    pub fn dump<T: Debug + ?Sized>(&self, descr: &str, value: &T) {
        self.write_dump(descr, &structure(value));
    }

    pub fn ddump<T: Debug + ?Sized>(&self, descr: &str, value: &T) {
        if !self.is_debug_enabled() {
            return;
        }
        self.dump(descr, value);
    }

    /// Decode `raw` as JSON and [`Logger::ddump`] the result.
    ///
    /// Skipped entirely, including decoding, unless debug output is enabled.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not valid JSON. Nothing is written in that case.
    pub fn ddump_unmarshaled(&self, descr: &str, raw: &[u8]) {
        if self.try_ddump_unmarshaled(descr, raw).is_err() {
            panic!("{}", UNMARSHAL_PANIC);
        }
    }

    pub fn try_ddump_unmarshaled(&self, descr: &str, raw: &[u8]) -> Result<()> {
        if !self.is_debug_enabled() {
            return Ok(());
        }

        let value: serde_json::Value = serde_json::from_slice(raw).map_err(LogError::Deserialize)?;
        self.ddump(descr, &value);
        Ok(())
    }

    fn write_dump(&self, descr: &str, body: &str) {
        let mut block = String::with_capacity(2 * descr.len() + body.len() + 2 * DUMP_START.len());
        block.push_str(descr);
        block.push_str(DUMP_START);
        block.push_str(body);
        if !body.ends_with('\n') {
            block.push('\n');
        }
        block.push_str(descr);
        block.push_str(DUMP_END);

        self.write_raw(block.as_bytes());
    }
}

fn structure<T: Debug + ?Sized>(value: &T) -> String {
    format!("({}) {:#?}\n", std::any::type_name::<T>(), value)
}
