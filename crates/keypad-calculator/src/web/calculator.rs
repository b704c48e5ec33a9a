//! Calculator bound to a DOM
//!
//! Clicks arrive as element IDs; every press repaints the readout elements
//! through the calculator's render callback.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use tracing::debug;

use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::{button_id, WebKeypad};
use crate::config::CalculatorConfig;
use crate::core::{CalcResult, Calculator, Key, Readout};

/// ID of the pending-expression preview element
pub const EXPRESSION_ID: &str = "calc-expression";
/// ID of the value element
pub const DISPLAY_ID: &str = "calc-display";
/// ID of the error element
pub const ERROR_ID: &str = "calc-error";

/// Builds the calculator card: title, readout, keypad and footer
#[must_use]
pub fn calculator_element(keypad: &WebKeypad) -> DomElement {
    let readout = DomElement::new("div")
        .with_id("calc-readout")
        .with_class("text-right")
        .with_child(
            DomElement::new("div")
                .with_id(EXPRESSION_ID)
                .with_class("text-muted")
                .with_visible(false),
        )
        .with_child(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("text-3xl")
                .with_text("0"),
        )
        .with_child(
            DomElement::new("div")
                .with_id(ERROR_ID)
                .with_class("text-error")
                .with_visible(false),
        );

    DomElement::new("div")
        .with_id("calculator")
        .with_class("card")
        .with_child(
            DomElement::new("h2")
                .with_id("calc-title")
                .with_text("Calculator"),
        )
        .with_child(readout)
        .with_child(keypad.create_keypad_element())
        .with_child(
            DomElement::new("p")
                .with_id("calc-footer")
                .with_text("Perform basic arithmetic operations"),
        )
}

/// Writes a readout into the DOM
fn paint(dom: &mut MockDom, readout: &Readout) {
    let expression = readout.expression.as_deref().unwrap_or_default();
    dom.set_element_text(EXPRESSION_ID, expression);
    dom.set_element_visible(EXPRESSION_ID, readout.expression.is_some());

    dom.set_element_text(DISPLAY_ID, &readout.value);

    let error = readout.error.as_deref().unwrap_or_default();
    dom.set_element_text(ERROR_ID, error);
    dom.set_element_visible(ERROR_ID, readout.error.is_some());
}

/// Web calculator - a [`Calculator`] painting into a [`MockDom`]
#[derive(Debug)]
pub struct WebCalculator {
    calculator: Calculator,
    keypad: WebKeypad,
    dom: Rc<RefCell<MockDom>>,
}

impl Default for WebCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WebCalculator {
    /// Creates a web calculator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a web calculator from loaded configuration
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::with_calculator(Calculator::from_config(config))
    }

    fn with_calculator(mut calculator: Calculator) -> Self {
        let keypad = WebKeypad::new();
        let dom = Rc::new(RefCell::new(MockDom::from_root(calculator_element(
            &keypad,
        ))));

        let target = Rc::clone(&dom);
        calculator.on_render(move |readout| paint(&mut target.borrow_mut(), readout));

        Self {
            calculator,
            keypad,
            dom,
        }
    }

    /// Dispatches a click on an element.
    ///
    /// Clicks on anything but a keypad button are logged and rejected with
    /// [`CalcError::UnknownKey`](crate::core::CalcError::UnknownKey).
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.dom
            .borrow_mut()
            .dispatch_event(DomEvent::click(element_id));

        let key = self.keypad.handle_click(element_id)?;
        debug!(element_id, key = %key, "button clicked");
        self.calculator.press(key).map(|_| ())
    }

    /// Clicks the button with the given label
    pub fn press(&mut self, label: &str) -> CalcResult<()> {
        let key = Key::from_label(label)?;
        self.click(&button_id(key))
    }

    /// Returns to the idle state and repaints
    pub fn reset(&mut self) {
        self.calculator.reset();
    }

    /// Text of the value element
    #[must_use]
    pub fn display(&self) -> String {
        self.text_of(DISPLAY_ID).unwrap_or_default()
    }

    /// Text of the preview element, when shown
    #[must_use]
    pub fn expression(&self) -> Option<String> {
        self.visible_text(EXPRESSION_ID)
    }

    /// Text of the error element, when shown
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.visible_text(ERROR_ID)
    }

    fn text_of(&self, id: &str) -> Option<String> {
        self.dom.borrow().get_element_text(id).map(str::to_string)
    }

    fn visible_text(&self, id: &str) -> Option<String> {
        if self.dom.borrow().is_visible(id) {
            self.text_of(id)
        } else {
            None
        }
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &WebKeypad {
        &self.keypad
    }

    /// Borrows the DOM
    #[must_use]
    pub fn dom(&self) -> Ref<'_, MockDom> {
        self.dom.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, DivisionPolicy};

    fn click_all(calc: &mut WebCalculator, ids: &[&str]) {
        for id in ids {
            calc.click(id).unwrap();
        }
    }

    #[test]
    fn test_initial_dom() {
        let calc = WebCalculator::new();
        let dom = calc.dom();
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("0"));
        assert!(!dom.is_visible(EXPRESSION_ID));
        assert!(!dom.is_visible(ERROR_ID));
        assert_eq!(dom.get_element_text("calc-title"), Some("Calculator"));
        assert!(dom.get_element("btn-0").unwrap().has_class("col-span-2"));
    }

    #[test]
    fn test_click_updates_display() {
        let mut calc = WebCalculator::new();
        click_all(&mut calc, &["btn-4", "btn-2"]);
        assert_eq!(calc.display(), "42");
        assert_eq!(calc.expression(), None);
    }

    #[test]
    fn test_click_shows_expression() {
        let mut calc = WebCalculator::new();
        click_all(&mut calc, &["btn-1", "btn-2", "btn-plus"]);
        assert_eq!(calc.expression().as_deref(), Some("12 +"));
        assert!(calc.dom().is_visible(EXPRESSION_ID));

        click_all(&mut calc, &["btn-3", "btn-equals"]);
        assert_eq!(calc.display(), "15");
        assert_eq!(calc.expression(), None);
    }

    #[test]
    fn test_clicks_are_logged() {
        let mut calc = WebCalculator::new();
        click_all(&mut calc, &["btn-7", "btn-clear"]);
        let dom = calc.dom();
        let targets: Vec<_> = dom.event_history().iter().map(DomEvent::target).collect();
        assert_eq!(targets, ["btn-7", "btn-clear"]);
    }

    #[test]
    fn test_click_non_button() {
        let mut calc = WebCalculator::new();
        assert_eq!(
            calc.click("calc-display"),
            Err(CalcError::UnknownKey("calc-display".into()))
        );
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.dom().event_history().len(), 1);
    }

    #[test]
    fn test_press_by_label() {
        let mut calc = WebCalculator::new();
        calc.press("9").unwrap();
        calc.press("+/-").unwrap();
        assert_eq!(calc.display(), "-9");
        assert_eq!(calc.dom().event_history()[1].target(), "btn-toggle-sign");
    }

    #[test]
    fn test_strict_division_shows_error() {
        let config = CalculatorConfig::new().with_division_policy(DivisionPolicy::Error);
        let mut calc = WebCalculator::from_config(&config);
        click_all(&mut calc, &["btn-5", "btn-divide", "btn-0"]);

        assert_eq!(calc.click("btn-equals"), Err(CalcError::DivisionByZero));
        assert_eq!(calc.error().as_deref(), Some("Division by zero"));
        assert_eq!(calc.display(), "0");

        calc.click("btn-clear").unwrap();
        assert_eq!(calc.error(), None);
    }

    #[test]
    fn test_reset_repaints() {
        let mut calc = WebCalculator::new();
        click_all(&mut calc, &["btn-8", "btn-times"]);
        calc.reset();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.expression(), None);
        assert_eq!(calc.calculator().display(), "0");
    }

    #[test]
    fn test_keypad_access() {
        let calc = WebCalculator::new();
        assert_eq!(calc.keypad().button_count(), 19);
    }
}
