//! Calculator core: state, transitions, evaluation and readout
//!
//! Everything here is frontend-agnostic. The terminal UI, the DOM frontend
//! and batch mode all drive the same [`Calculator`] and differ only in how
//! they turn pointer events into [`Key`]s and how they paint the [`Readout`].

mod calculator;
pub mod display;
mod key;
pub mod layout;
pub mod number;
mod operations;
pub mod state;

pub use calculator::{Calculator, RenderCallback};
pub use display::{DisplayFormat, Readout};
pub use key::Key;
pub use layout::{ButtonDef, ButtonVariant, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};
pub use operations::{evaluate, DivisionPolicy, Operator};
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors a key press can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero under [`DivisionPolicy::Error`]
    #[error("Division by zero")]
    DivisionByZero,

    /// A label or element id that maps to no keypad button
    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_unknown_key() {
        let err = CalcError::UnknownKey("sqrt".into());
        assert_eq!(err.to_string(), "Unknown key: sqrt");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
