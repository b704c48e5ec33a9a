//! Keypad keys

use crate::core::{CalcError, CalcResult, Operator};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single button press, independent of how the frontend received it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of the four operators
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset all state
    Clear,
    /// Divide the display by 100
    Percent,
    /// Negate the display
    ToggleSign,
}

impl Key {
    /// Returns the digit key for `d`, or `None` outside 0-9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.symbol(),
            Self::Equals => "=",
            Self::Clear => "C",
            Self::Percent => "%",
            Self::ToggleSign => "+/-",
        }
    }

    /// Parses a button label.
    ///
    /// Accepts the printed labels plus ASCII aliases for the operators
    /// (`*`, `x`, `/`) and lowercase `c`.
    pub fn from_label(label: &str) -> CalcResult<Self> {
        let label = label.trim();
        if let Some(d) = DIGIT_LABELS.iter().position(|l| *l == label) {
            return Ok(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(label) {
            return Ok(Self::Operator(op));
        }
        match label {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "C" | "c" => Ok(Self::Clear),
            "%" => Ok(Self::Percent),
            "+/-" | "±" => Ok(Self::ToggleSign),
            _ => Err(CalcError::UnknownKey(label.to_string())),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_constructor_bounds() {
        assert_eq!(Key::digit(0), Some(Key::Digit(0)));
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Digit(7).label(), "7");
        assert_eq!(Key::Decimal.label(), ".");
        assert_eq!(Key::Operator(Operator::Multiply).label(), "×");
        assert_eq!(Key::Equals.label(), "=");
        assert_eq!(Key::Clear.label(), "C");
        assert_eq!(Key::Percent.label(), "%");
        assert_eq!(Key::ToggleSign.label(), "+/-");
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(Key::Digit(12).label(), "?");
    }

    #[test]
    fn test_from_label_roundtrip() {
        let keys = [
            Key::Digit(0),
            Key::Digit(5),
            Key::Decimal,
            Key::Operator(Operator::Add),
            Key::Operator(Operator::Subtract),
            Key::Operator(Operator::Multiply),
            Key::Operator(Operator::Divide),
            Key::Equals,
            Key::Clear,
            Key::Percent,
            Key::ToggleSign,
        ];
        for key in keys {
            assert_eq!(Key::from_label(key.label()), Ok(key));
        }
    }

    #[test]
    fn test_from_label_aliases() {
        assert_eq!(Key::from_label("/"), Ok(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_label(" * "), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_label("c"), Ok(Key::Clear));
        assert_eq!(Key::from_label("±"), Ok(Key::ToggleSign));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(
            Key::from_label("sqrt"),
            Err(CalcError::UnknownKey("sqrt".into()))
        );
        assert!(Key::from_label("12").is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Key::ToggleSign.to_string(), "+/-");
    }
}
