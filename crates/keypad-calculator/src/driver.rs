//! Unified calculator driver
//!
//! The same checks run against the headless [`Calculator`], the terminal UI
//! (through real hit-tested clicks) and the DOM frontend (through dispatched
//! click events). A driver speaks in button labels, so every check reads
//! like a sequence of presses on the keypad.

use crate::core::{CalcResult, Calculator};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::core::Calculator;
/// use keypad_calculator::driver::{verify_basic_arithmetic, CalculatorDriver};
///
/// let mut calc = Calculator::new();
/// verify_basic_arithmetic(&mut calc);
///
/// calc.press_all("6 × 7 =").unwrap();
/// assert_eq!(CalculatorDriver::display(&calc), "42");
/// ```
pub trait CalculatorDriver {
    /// Presses the button with the given label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the value line of the readout
    fn display(&self) -> String;

    /// Gets the pending-expression preview, if any
    fn expression(&self) -> Option<String>;

    /// Returns the calculator to its idle state
    fn reset(&mut self);

    /// Presses whitespace-separated labels in order, stopping at the first
    /// error
    fn press_all(&mut self, labels: &str) -> CalcResult<()> {
        for label in labels.split_whitespace() {
            self.press(label)?;
        }
        Ok(())
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.press_label(label).map(|_| ())
    }

    fn display(&self) -> String {
        self.readout().value.clone()
    }

    fn expression(&self) -> Option<String> {
        self.readout().expression.clone()
    }

    fn reset(&mut self) {
        Calculator::reset(self);
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{CalcResult, CalculatorDriver};
    use crate::core::{CalcError, Key};
    use crate::tui::CalculatorApp;

    /// Terminal size the driver pretends to draw into
    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    /// Drives the terminal app by clicking the screen position of each button
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(mut app: CalculatorApp) -> Self {
            if app.viewport().area() == 0 {
                app.set_viewport(VIEWPORT);
            }
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let key = Key::from_label(label)?;
            let (x, y) = self
                .app
                .keypad()
                .button_center(self.app.keypad_area(), key)
                .ok_or_else(|| CalcError::UnknownKey(label.to_string()))?;

            self.app.click(x, y);
            self.app.release();

            match self.app.calculator().last_error() {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        fn display(&self) -> String {
            self.app.readout().value.clone()
        }

        fn expression(&self) -> Option<String> {
            self.app.readout().expression.clone()
        }

        fn reset(&mut self) {
            self.app.calculator_mut().reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared checks =====
// These run against ANY CalculatorDriver implementation

fn enter<D: CalculatorDriver>(driver: &mut D, labels: &str) {
    if let Err(err) = driver.press_all(labels) {
        panic!("pressing {labels:?} failed: {err}");
    }
}

fn check<D: CalculatorDriver>(driver: &mut D, labels: &str, expected: &str) {
    driver.reset();
    enter(driver, labels);
    assert_eq!(driver.display(), expected, "after {labels:?}");
}

/// Verifies digit entry, leading-zero collapse and the decimal point
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "0 0 7", "7");
    check(driver, "1 2 . 5", "12.5");
    check(driver, ". 5", "0.5");
    check(driver, "3 . . 1", "3.1");
}

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "1 + 2 =", "3");
    check(driver, "9 - 4 =", "5");
    check(driver, "6 × 7 =", "42");
    check(driver, "8 ÷ 2 =", "4");
}

/// Verifies that operators chain left to right
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "2 + 3 + 4 =", "9");
    check(driver, "2 + 3 ×", "5");
    assert_eq!(driver.expression().as_deref(), Some("5 ×"));
    check(driver, "2 + 3 × 4 =", "20");
}

/// Verifies the default division-by-zero result
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "5 ÷ 0 =", "0");
}

/// Verifies percent and sign toggle
pub fn verify_unary_keys<D: CalculatorDriver>(driver: &mut D) {
    check(driver, "5 0 %", "0.5");
    check(driver, "7 +/-", "-7");
    check(driver, "7 +/- +/-", "7");
}

/// Verifies that C returns to the idle state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "9 × 3");
    enter(driver, "C");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), None);

    // A digit after clear starts a fresh operand
    enter(driver, "4 =");
    assert_eq!(driver.display(), "4");
}

/// Verifies the pending-expression preview
pub fn verify_expression_preview<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "1 2 +");
    assert_eq!(driver.expression().as_deref(), Some("12 +"));
    assert_eq!(driver.display(), "12");

    enter(driver, "3 =");
    assert_eq!(driver.expression(), None);
}

/// Verifies floating point output and exponent display
pub fn verify_number_formatting<D: CalculatorDriver>(driver: &mut D) {
    // 0.30000000000000004 is longer than the value line allows
    check(driver, "0 . 1 + 0 . 2 =", "3.000000e-1");
    check(driver, "1 2 3 4 5 6 7 8 9 0 1 2", "123456789012");
    check(driver, "1 2 3 4 5 6 7 8 9 0 1 2 3", "1.234568e+12");
}

/// Runs every shared check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_chained_operations(driver);
    verify_division_by_zero(driver);
    verify_unary_keys(driver);
    verify_clear(driver);
    verify_expression_preview(driver);
    verify_number_formatting(driver);
}
