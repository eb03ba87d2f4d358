//! Text formatting for log records

use super::types::Level;
use nu_ansi_term::Color;
use std::fmt::{Display, Write as _};

/// Messages are padded to this width when fields follow them, so field
/// columns line up across records.
const MESSAGE_COLUMN_WIDTH: usize = 44;

/// Formats records as single colorized text lines without timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    colors: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { colors: true }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Render one record as a newline-terminated line
    pub fn format(&self, level: Level, message: &str) -> String {
        self.format_with_fields(level, message, &[])
    }

    /// Render one record followed by `key=value` fields
    pub fn format_with_fields(
        &self,
        level: Level,
        message: &str,
        fields: &[(String, String)],
    ) -> String {
        let message = message.trim_end_matches(['\n', '\r']);
        let color = level_color(level);
        let mut line = String::with_capacity(message.len() + 16);

        self.paint_into(&mut line, color, level.short_name());
        line.push(' ');

        if fields.is_empty() {
            line.push_str(message);
        } else {
            let _ = write!(line, "{:<width$}", message, width = MESSAGE_COLUMN_WIDTH);

            for (key, value) in fields {
                line.push(' ');
                self.paint_into(&mut line, color, key);
                line.push('=');
                line.push_str(value);
            }
        }

        line.push('\n');
        line
    }

    fn paint_into(&self, line: &mut String, color: Color, text: &str) {
        if self.colors {
            let _ = write!(line, "{}", color.paint(text));
        } else {
            line.push_str(text);
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Debug => Color::White,
        Level::Info => Color::Cyan,
        Level::Warn => Color::Yellow,
        Level::Error | Level::Panic | Level::Fatal => Color::Red,
    }
}

/// Space-separated rendering of the operands.
pub fn join(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Operands rendered back to back.
pub fn concat(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for arg in args {
        let _ = write!(out, "{}", arg);
    }
    out
}
