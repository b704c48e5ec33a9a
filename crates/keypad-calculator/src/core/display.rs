//! Readout: what a frontend paints for a given state
//!
//! Visual feedback: the readout is a plain value, so every frontend shows
//! the same two lines for the same state.

use serde::{Deserialize, Serialize};

use crate::core::number::{parse_number, to_exponential, MAX_FRACTION_DIGITS};
use crate::core::CalculatorState;

/// Controls when the value line switches to exponent notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFormat {
    /// Display strings longer than this many characters are shown in
    /// exponent form
    pub exponent_threshold: usize,
    /// Fraction digits used in exponent form
    pub exponent_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            exponent_threshold: Self::DEFAULT_EXPONENT_THRESHOLD,
            exponent_digits: Self::DEFAULT_EXPONENT_DIGITS,
        }
    }
}

impl DisplayFormat {
    /// Default character threshold
    pub const DEFAULT_EXPONENT_THRESHOLD: usize = 12;

    /// Default fraction digits in exponent form
    pub const DEFAULT_EXPONENT_DIGITS: usize = 6;

    /// Largest accepted `exponent_digits`
    pub const MAX_EXPONENT_DIGITS: usize = MAX_FRACTION_DIGITS;

    /// Formats a display string for the value line
    #[must_use]
    pub fn format_value(&self, display: &str) -> String {
        if display.chars().count() > self.exponent_threshold {
            to_exponential(parse_number(display), self.exponent_digits)
        } else {
            display.to_string()
        }
    }
}

/// The two-line display plus an optional error line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Readout {
    /// Pending expression preview, e.g. `12 +`
    pub expression: Option<String>,
    /// Current value
    pub value: String,
    /// Message for the last rejected key
    pub error: Option<String>,
}

impl Readout {
    /// Builds the readout for `state`
    #[must_use]
    pub fn from_state(state: &CalculatorState, format: DisplayFormat) -> Self {
        let expression = match (state.previous(), state.operator()) {
            (Some(previous), Some(op)) => Some(format!("{previous} {op}")),
            _ => None,
        };

        Self {
            expression,
            value: format.format_value(state.display()),
            error: None,
        }
    }

    /// Attaches an error message
    #[must_use]
    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Renders the readout as text lines: preview (if any), value, error (if any)
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::with_capacity(3);
        if let Some(expression) = &self.expression {
            lines.push(expression.as_str());
        }
        lines.push(self.value.as_str());
        if let Some(error) = &self.error {
            lines.push(error.as_str());
        }
        lines
    }
}
