//! Binary operators and the pure evaluator
//!
//! Error prevention: the operator set is a closed enum, so there is no
//! fallback arm for an unknown symbol.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order, top to bottom
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the symbol shown on the button and in the expression preview
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parses a button symbol; ASCII aliases are accepted for typing
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Stable name used in DOM element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What division by zero produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// The quotient is `0`, and no error is raised
    #[default]
    #[serde(rename = "zero")]
    ZeroResult,
    /// The press is rejected with [`CalcError::DivisionByZero`]
    Error,
}

/// Applies `op` to two operands.
///
/// Addition, subtraction and multiplication map straight onto IEEE
/// arithmetic, so NaN operands propagate. A zero divisor (including `-0`)
/// is resolved by `policy`.
pub fn evaluate(first: f64, second: f64, op: Operator, policy: DivisionPolicy) -> CalcResult<f64> {
    match op {
        Operator::Add => Ok(first + second),
        Operator::Subtract => Ok(first - second),
        Operator::Multiply => Ok(first * second),
        Operator::Divide if second == 0.0 => match policy {
            DivisionPolicy::ZeroResult => Ok(0.0),
            DivisionPolicy::Error => Err(CalcError::DivisionByZero),
        },
        Operator::Divide => Ok(first / second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Operator tests =====

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), "+");
        assert_eq!(Operator::Subtract.symbol(), "-");
        assert_eq!(Operator::Multiply.symbol(), "×");
        assert_eq!(Operator::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operator_from_symbol_roundtrip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_operator_ascii_aliases() {
        assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("^"), None);
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(format!("{}", Operator::Divide), "÷");
    }

    // ===== evaluate tests =====

    #[test]
    fn test_evaluate_basic_operations() {
        let policy = DivisionPolicy::ZeroResult;
        assert_eq!(evaluate(1.0, 2.0, Operator::Add, policy), Ok(3.0));
        assert_eq!(evaluate(5.0, 8.0, Operator::Subtract, policy), Ok(-3.0));
        assert_eq!(evaluate(6.0, 7.0, Operator::Multiply, policy), Ok(42.0));
        assert_eq!(evaluate(9.0, 4.0, Operator::Divide, policy), Ok(2.25));
    }

    #[test]
    fn test_divide_by_zero_yields_zero_by_default() {
        let result = evaluate(5.0, 0.0, Operator::Divide, DivisionPolicy::default());
        assert_eq!(result, Ok(0.0));
    }

    #[test]
    fn test_divide_by_negative_zero_is_zero_divisor() {
        let result = evaluate(5.0, -0.0, Operator::Divide, DivisionPolicy::ZeroResult);
        assert_eq!(result, Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero_strict_policy() {
        let result = evaluate(5.0, 0.0, Operator::Divide, DivisionPolicy::Error);
        assert_eq!(result, Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_nan_operands_propagate() {
        let result = evaluate(f64::NAN, 1.0, Operator::Add, DivisionPolicy::ZeroResult).unwrap();
        assert!(result.is_nan());
        let result = evaluate(1.0, f64::NAN, Operator::Divide, DivisionPolicy::Error).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_policy_serde_names() {
        assert_eq!(
            serde_json::to_string(&DivisionPolicy::ZeroResult).unwrap(),
            "\"zero\""
        );
        assert_eq!(
            serde_json::from_str::<DivisionPolicy>("\"error\"").unwrap(),
            DivisionPolicy::Error
        );
    }
}
