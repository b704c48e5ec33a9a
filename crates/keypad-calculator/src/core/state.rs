//! Calculator state and its transitions
//!
//! Error prevention: every handler validates before it mutates, so a
//! rejected key leaves the state exactly as it was.

use crate::core::number::{format_number, parse_number};
use crate::core::{evaluate, CalcError, CalcResult, DivisionPolicy, Key, Operator};

/// The four fields a keypad calculator needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Operand currently shown
    display: String,
    /// Left operand captured when an operator was pressed
    previous: Option<String>,
    /// Operator waiting for its second operand
    operator: Option<Operator>,
    /// Next digit replaces the display instead of extending it
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the idle state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            operator: None,
            awaiting_operand: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the captured left operand
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Returns the pending operator
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns true if the next digit starts a new operand
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Returns the state that follows pressing `key`.
    ///
    /// `self` is never modified; on error the caller keeps its old state.
    pub fn apply(&self, key: Key, policy: DivisionPolicy) -> CalcResult<Self> {
        let mut next = self.clone();
        match key {
            Key::Digit(d) => next.input_digit(d)?,
            Key::Decimal => next.input_decimal(),
            Key::Operator(op) => next.input_operator(op, policy)?,
            Key::Equals => next.equals(policy)?,
            Key::Clear => next.clear(),
            Key::Percent => next.percentage(),
            Key::ToggleSign => next.toggle_sign(),
        }
        Ok(next)
    }

    /// Enters a digit, replacing a lone `0` or a finished operand
    pub fn input_digit(&mut self, digit: u8) -> CalcResult<()> {
        let ch = char::from_digit(u32::from(digit), 10)
            .ok_or_else(|| CalcError::UnknownKey(digit.to_string()))?;

        if self.awaiting_operand {
            self.display = ch.to_string();
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display = ch.to_string();
        } else {
            self.display.push(ch);
        }
        Ok(())
    }

    /// Enters the decimal point; a second point in one operand is ignored
    pub fn input_decimal(&mut self) {
        if self.awaiting_operand {
            self.display = "0.".to_string();
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Stores `op` as the pending operator.
    ///
    /// The first operator captures the display as the left operand. When an
    /// operator is already pending, it is evaluated first and the result
    /// becomes both the display and the new left operand.
    pub fn input_operator(&mut self, op: Operator, policy: DivisionPolicy) -> CalcResult<()> {
        let input = parse_number(&self.display);

        if let Some(previous) = self.previous.as_deref() {
            if let Some(pending) = self.operator {
                let result = evaluate(parse_number(previous), input, pending, policy)?;
                let text = format_number(result);
                self.display.clone_from(&text);
                self.previous = Some(text);
            }
        } else {
            self.previous = Some(format_number(input));
        }

        self.awaiting_operand = true;
        self.operator = Some(op);
        Ok(())
    }

    /// Evaluates the pending operation, if there is one
    pub fn equals(&mut self, policy: DivisionPolicy) -> CalcResult<()> {
        let (Some(previous), Some(op)) = (self.previous.as_deref(), self.operator) else {
            return Ok(());
        };

        let result = evaluate(parse_number(previous), parse_number(&self.display), op, policy)?;
        self.display = format_number(result);
        self.previous = None;
        self.operator = None;
        self.awaiting_operand = true;
        Ok(())
    }

    /// Resets every field to the idle state
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Divides the display by 100 in place
    pub fn percentage(&mut self) {
        self.display = format_number(parse_number(&self.display) / 100.0);
    }

    /// Negates the display in place
    pub fn toggle_sign(&mut self) {
        self.display = format_number(parse_number(&self.display) * -1.0);
    }
}
