//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::UiAction;
use super::keypad::Keypad;
use super::ui;
use crate::config::CalculatorConfig;
use crate::core::{Calculator, Key, Readout};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Headless calculator the keypad drives
    calculator: Calculator,
    /// Keypad with highlight state
    keypad: Keypad,
    /// Last known terminal area, used to hit-test clicks
    viewport: Rect,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new())
    }

    /// Creates a calculator app from loaded configuration
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::with_calculator(Calculator::from_config(config))
    }

    fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            keypad: Keypad::new(),
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the calculator for direct manipulation
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current readout
    #[must_use]
    pub fn readout(&self) -> &Readout {
        self.calculator.readout()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records the terminal area the UI is drawn into
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Returns the last recorded terminal area
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Returns the screen rectangle of the keypad widget
    #[must_use]
    pub fn keypad_area(&self) -> Rect {
        ui::layout(self.viewport).keypad
    }

    /// Handles a left click at a screen position.
    ///
    /// Returns the key pressed, or `None` when the click missed the keypad.
    /// A rejected press still counts as a press; the error is shown on the
    /// readout.
    pub fn click(&mut self, column: u16, row: u16) -> Option<Key> {
        let index = self.keypad.hit_test(self.keypad_area(), column, row)?;
        let key = self.keypad.get_button(index)?.key();
        self.keypad.press_button(index);
        let _ = self.calculator.press(key);
        Some(key)
    }

    /// Releases the highlighted button
    pub fn release(&mut self) {
        self.keypad.release_all();
    }

    /// Applies an input action
    pub fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::Click { column, row } => {
                if self.click(column, row).is_none() {
                    debug!(column, row, "click outside keypad");
                }
            }
            UiAction::Release => self.release(),
            UiAction::Resize { width, height } => {
                self.set_viewport(Rect::new(0, 0, width, height));
            }
            UiAction::Quit => self.quit(),
            UiAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, DivisionPolicy, Operator};

    fn app_with_viewport() -> CalculatorApp {
        let mut app = CalculatorApp::new();
        app.set_viewport(Rect::new(0, 0, 80, 24));
        app
    }

    fn click_key(app: &mut CalculatorApp, key: Key) -> Option<Key> {
        let (x, y) = app.keypad().button_center(app.keypad_area(), key)?;
        app.click(x, y)
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.readout().value, "0");
        assert!(!app.should_quit());
        assert_eq!(app.viewport(), Rect::default());
    }

    #[test]
    fn test_click_presses_key() {
        let mut app = app_with_viewport();
        assert_eq!(click_key(&mut app, Key::Digit(7)), Some(Key::Digit(7)));
        assert_eq!(app.readout().value, "7");
    }

    #[test]
    fn test_click_highlights_until_release() {
        let mut app = app_with_viewport();
        click_key(&mut app, Key::Digit(5));
        let pressed = app.keypad().pressed_button().unwrap();
        assert_eq!(app.keypad().get_button(pressed).unwrap().key(), Key::Digit(5));

        app.handle(UiAction::Release);
        assert!(app.keypad().pressed_button().is_none());
    }

    #[test]
    fn test_click_sequence_computes() {
        let mut app = app_with_viewport();
        for key in [
            Key::Digit(1),
            Key::Operator(Operator::Add),
            Key::Digit(2),
            Key::Equals,
        ] {
            click_key(&mut app, key).unwrap();
            app.release();
        }
        assert_eq!(app.readout().value, "3");
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = app_with_viewport();
        assert!(app.click(0, 0).is_none());
        app.handle(UiAction::Click { column: 0, row: 0 });
        assert_eq!(app.readout().value, "0");
        assert!(app.keypad().pressed_button().is_none());
    }

    #[test]
    fn test_click_without_viewport_misses() {
        let mut app = CalculatorApp::new();
        assert!(app.click(10, 10).is_none());
    }

    #[test]
    fn test_rejected_click_shows_error() {
        let config = CalculatorConfig::new().with_division_policy(DivisionPolicy::Error);
        let mut app = CalculatorApp::from_config(&config);
        app.set_viewport(Rect::new(0, 0, 80, 24));
        app.calculator_mut().press_sequence("5 ÷ 0").unwrap();

        assert_eq!(click_key(&mut app, Key::Equals), Some(Key::Equals));
        assert_eq!(app.calculator().last_error(), Some(&CalcError::DivisionByZero));
        assert_eq!(app.readout().error.as_deref(), Some("Division by zero"));
    }

    #[test]
    fn test_handle_resize_and_quit() {
        let mut app = CalculatorApp::new();
        app.handle(UiAction::Resize {
            width: 100,
            height: 30,
        });
        assert_eq!(app.viewport(), Rect::new(0, 0, 100, 30));

        app.handle(UiAction::None);
        assert!(!app.should_quit());
        app.handle(UiAction::Quit);
        assert!(app.should_quit());
    }
}
