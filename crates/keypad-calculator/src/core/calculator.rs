//! Calculator controller: owns the state and notifies a render callback

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::core::{
    CalcError, CalcResult, CalculatorState, DisplayFormat, DivisionPolicy, Key, Readout,
};

/// Callback invoked with the new readout after every press
pub type RenderCallback = Box<dyn FnMut(&Readout)>;

/// A calculator instance: one state, one policy, one optional renderer
pub struct Calculator {
    state: CalculatorState,
    policy: DivisionPolicy,
    format: DisplayFormat,
    readout: Readout,
    last_error: Option<CalcError>,
    on_render: Option<RenderCallback>,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("format", &self.format)
            .field("readout", &self.readout)
            .field("last_error", &self.last_error)
            .field("on_render", &self.on_render.is_some())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default policy and display format
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(DivisionPolicy::default(), DisplayFormat::default())
    }

    /// Creates a calculator with a specific division policy
    #[must_use]
    pub fn with_policy(policy: DivisionPolicy) -> Self {
        Self::with_settings(policy, DisplayFormat::default())
    }

    /// Creates a calculator from loaded configuration
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::with_settings(config.division_by_zero, config.display_format())
    }

    fn with_settings(policy: DivisionPolicy, format: DisplayFormat) -> Self {
        let state = CalculatorState::new();
        let readout = Readout::from_state(&state, format);
        Self {
            state,
            policy,
            format,
            readout,
            last_error: None,
            on_render: None,
        }
    }

    /// Registers the render callback and immediately renders the current state
    pub fn on_render(&mut self, callback: impl FnMut(&Readout) + 'static) {
        self.on_render = Some(Box::new(callback));
        self.notify();
    }

    /// Presses a key.
    ///
    /// On success the new readout is returned and rendered. On error the
    /// state is left untouched, the error is recorded on the readout and
    /// rendered, and the error is returned.
    pub fn press(&mut self, key: Key) -> CalcResult<&Readout> {
        debug!(key = %key, "key pressed");

        match self.state.apply(key, self.policy) {
            Ok(next) => {
                self.state = next;
                self.last_error = None;
                self.refresh();
                debug!(display = %self.state.display(), "transition applied");
                Ok(&self.readout)
            }
            Err(err) => {
                warn!(key = %key, error = %err, "key rejected");
                self.last_error = Some(err.clone());
                self.refresh();
                Err(err)
            }
        }
    }

    /// Presses the button with the given label
    pub fn press_label(&mut self, label: &str) -> CalcResult<&Readout> {
        let key = Key::from_label(label)?;
        self.press(key)
    }

    /// Presses a whitespace-separated sequence of labels, stopping at the
    /// first error
    pub fn press_sequence(&mut self, labels: &str) -> CalcResult<&Readout> {
        for label in labels.split_whitespace() {
            self.press_label(label)?;
        }
        Ok(&self.readout)
    }

    /// Returns to the idle state
    pub fn reset(&mut self) {
        self.state.clear();
        self.last_error = None;
        self.refresh();
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the current readout
    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Returns the raw display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the division policy
    #[must_use]
    pub fn policy(&self) -> DivisionPolicy {
        self.policy
    }

    /// Returns the error from the last press, if it was rejected
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    fn refresh(&mut self) {
        self.readout = Readout::from_state(&self.state, self.format)
            .with_error(self.last_error.as_ref().map(ToString::to_string));
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_render.as_mut() {
            callback(&self.readout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_calculator() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.readout().value, "0");
        assert_eq!(calc.policy(), DivisionPolicy::ZeroResult);
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_press_returns_readout() {
        let mut calc = Calculator::new();
        calc.press(Key::Digit(4)).unwrap();
        let readout = calc.press(Key::Operator(Operator::Add)).unwrap();
        assert_eq!(readout.expression.as_deref(), Some("4 +"));
    }

    #[test]
    fn test_press_sequence() {
        let mut calc = Calculator::new();
        let readout = calc.press_sequence("2 + 3 + 4 =").unwrap();
        assert_eq!(readout.value, "9");
    }

    #[test]
    fn test_press_label_unknown() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.press_label("√"),
            Err(CalcError::UnknownKey(_))
        ));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_render_callback_sees_every_press() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut calc = Calculator::new();
        calc.on_render(move |readout| sink.borrow_mut().push(readout.value.clone()));
        calc.press_sequence("1 + 2 =").unwrap();

        assert_eq!(*seen.borrow(), ["0", "1", "1", "2", "3"]);
    }

    #[test]
    fn test_strict_policy_rejects_and_keeps_state() {
        let mut calc = Calculator::with_policy(DivisionPolicy::Error);
        calc.press_sequence("5 ÷ 0").unwrap();
        let before = calc.state().clone();

        assert_eq!(calc.press(Key::Equals), Err(CalcError::DivisionByZero));
        assert_eq!(calc.state(), &before);
        assert_eq!(calc.last_error(), Some(&CalcError::DivisionByZero));
        assert_eq!(calc.readout().error.as_deref(), Some("Division by zero"));
    }

    #[test]
    fn test_error_cleared_by_next_press() {
        let mut calc = Calculator::with_policy(DivisionPolicy::Error);
        let _ = calc.press_sequence("5 ÷ 0 =");
        calc.press(Key::Clear).unwrap();
        assert!(calc.last_error().is_none());
        assert!(calc.readout().error.is_none());
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::new();
        calc.press_sequence("9 × 9").unwrap();
        calc.reset();
        assert_eq!(calc.state(), &CalculatorState::new());
        assert_eq!(calc.readout().expression, None);
    }

    #[test]
    fn test_from_config() {
        let config = CalculatorConfig::new()
            .with_division_policy(DivisionPolicy::Error)
            .with_exponent_threshold(4);
        let mut calc = Calculator::from_config(&config);
        assert_eq!(calc.policy(), DivisionPolicy::Error);
        let readout = calc.press_sequence("1 2 3 4 5").unwrap();
        assert_eq!(readout.value, "1.234500e+4");
    }

    #[test]
    fn test_debug_hides_callback() {
        let mut calc = Calculator::new();
        calc.on_render(|_| {});
        let debug = format!("{calc:?}");
        assert!(debug.contains("Calculator"));
        assert!(debug.contains("on_render: true"));
    }
}
