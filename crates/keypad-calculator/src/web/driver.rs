//! DOM driver for the shared calculator checks

use super::calculator::WebCalculator;
use super::dom::MockDom;
use crate::core::CalcResult;
use crate::driver::CalculatorDriver;

/// Drives a [`WebCalculator`] through click events and reads the result
/// back from the DOM
#[derive(Debug, Default)]
pub struct WebDriver {
    calculator: WebCalculator,
}

impl WebDriver {
    /// Creates a new web driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a web driver with an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: WebCalculator) -> Self {
        Self { calculator }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &WebCalculator {
        &self.calculator
    }

    /// Returns a mutable reference to the calculator
    pub fn calculator_mut(&mut self) -> &mut WebCalculator {
        &mut self.calculator
    }

    /// Number of click events in the DOM history, which keeps the most
    /// recent `EVENT_HISTORY_LIMIT`
    #[must_use]
    pub fn click_count(&self) -> usize {
        self.dom().event_history().len()
    }

    fn dom(&self) -> std::cell::Ref<'_, MockDom> {
        self.calculator.dom()
    }
}

impl CalculatorDriver for WebDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.calculator.press(label)
    }

    fn display(&self) -> String {
        self.calculator.display()
    }

    fn expression(&self) -> Option<String> {
        self.calculator.expression()
    }

    fn reset(&mut self) {
        self.calculator.reset();
    }
}
