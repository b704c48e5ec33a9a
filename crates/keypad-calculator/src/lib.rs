//! Keypad Calculator
//!
//! A four-function calculator driven by clicking buttons on a fixed 4x5
//! keypad. One frontend-agnostic core is shared by a terminal UI, a DOM
//! frontend and a headless batch mode.
//!
//! Every press goes through a pure transition,
//! [`CalculatorState::apply`](core::CalculatorState::apply), and the
//! [`Calculator`](core::Calculator) controller hands the resulting
//! [`Readout`](core::Readout) to a render callback.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_sequence("1 2 +").unwrap();
//! assert_eq!(calc.readout().expression.as_deref(), Some("12 +"));
//!
//! let readout = calc.press_sequence("3 =").unwrap();
//! assert_eq!(readout.value, "15");
//!
//! // Division by zero shows 0 unless the strict policy is chosen
//! let mut strict = Calculator::with_policy(DivisionPolicy::Error);
//! assert_eq!(strict.press_sequence("5 ÷ 0 ="), Err(CalcError::DivisionByZero));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![warn(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;

#[cfg(feature = "tui")]
pub mod tui;

/// DOM frontend - always available for testing
/// (the mock DOM needs no browser)
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, DivisionPolicy, Key, Operator,
        Readout,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{AppError, AppResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::web::{DomElement, DomEvent, MockDom, WebCalculator, WebDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let _ = Calculator::new();
        let _ = CalculatorState::new();
        let _ = CalculatorConfig::default();
        let _ = MockDom::new();
        let _ = WebCalculator::new();
        let _ = WebDriver::new();
    }

    #[test]
    fn test_frontends_agree() {
        let labels = "1 2 . 5 × 4 - 1 0 =";

        let mut headless = Calculator::new();
        headless.press_all(labels).unwrap();

        let mut web = WebDriver::new();
        web.press_all(labels).unwrap();

        assert_eq!(CalculatorDriver::display(&headless), "40");
        assert_eq!(web.display(), "40");
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_agrees_with_web() {
        let labels = "9 ÷ 4 % +/-";

        let mut tui = TuiDriver::new();
        tui.press_all(labels).unwrap();

        let mut web = WebDriver::new();
        web.press_all(labels).unwrap();

        assert_eq!(tui.display(), web.display());
        assert_eq!(tui.display(), "-0.04");
    }

    #[test]
    fn test_key_from_label_via_prelude() {
        assert_eq!(Key::from_label("×"), Ok(Key::Operator(Operator::Multiply)));
        assert!(matches!(Key::from_label("^"), Err(CalcError::UnknownKey(_))));
    }

    #[test]
    fn test_app_error_via_prelude() {
        let err: AppError = CalcError::DivisionByZero.into();
        let result: AppResult<()> = Err(err);
        assert!(result.is_err());
        let _ = Readout::default();
    }
}
