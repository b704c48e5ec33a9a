//! The fixed keypad grid shared by every frontend
//!
//! ```text
//! [ C ] [+/-] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use crate::core::{Key, Operator};

/// Number of keypad columns
pub const KEYPAD_COLS: u16 = 4;

/// Number of keypad rows
pub const KEYPAD_ROWS: u16 = 5;

/// Visual category of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Digits, decimal point, sign toggle and percent
    Default,
    /// The four operators
    Operation,
    /// The equals button
    Equal,
    /// The clear button
    Clear,
}

impl ButtonVariant {
    /// CSS class used by the DOM frontend
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Default => "btn-default",
            Self::Operation => "btn-operation",
            Self::Equal => "btn-equal",
            Self::Clear => "btn-clear",
        }
    }
}

/// Position and look of one keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDef {
    /// Key the button presses
    pub key: Key,
    /// Visual category
    pub variant: ButtonVariant,
    /// Grid row (0-indexed)
    pub row: u16,
    /// First grid column (0-indexed)
    pub col: u16,
    /// Number of columns covered
    pub span: u16,
}

impl ButtonDef {
    const fn new(key: Key, variant: ButtonVariant, row: u16, col: u16) -> Self {
        Self {
            key,
            variant,
            row,
            col,
            span: 1,
        }
    }

    const fn digit(d: u8, row: u16, col: u16) -> Self {
        Self::new(Key::Digit(d), ButtonVariant::Default, row, col)
    }

    const fn operator(op: Operator, row: u16) -> Self {
        Self::new(Key::Operator(op), ButtonVariant::Operation, row, 3)
    }

    const fn wide(mut self, span: u16) -> Self {
        self.span = span;
        self
    }

    /// Returns true if the button covers grid cell (`row`, `col`)
    #[must_use]
    pub const fn covers(&self, row: u16, col: u16) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Every keypad button in row-major order
pub const KEYPAD_LAYOUT: [ButtonDef; 19] = [
    ButtonDef::new(Key::Clear, ButtonVariant::Clear, 0, 0),
    ButtonDef::new(Key::ToggleSign, ButtonVariant::Default, 0, 1),
    ButtonDef::new(Key::Percent, ButtonVariant::Default, 0, 2),
    ButtonDef::operator(Operator::Divide, 0),
    ButtonDef::digit(7, 1, 0),
    ButtonDef::digit(8, 1, 1),
    ButtonDef::digit(9, 1, 2),
    ButtonDef::operator(Operator::Multiply, 1),
    ButtonDef::digit(4, 2, 0),
    ButtonDef::digit(5, 2, 1),
    ButtonDef::digit(6, 2, 2),
    ButtonDef::operator(Operator::Subtract, 2),
    ButtonDef::digit(1, 3, 0),
    ButtonDef::digit(2, 3, 1),
    ButtonDef::digit(3, 3, 2),
    ButtonDef::operator(Operator::Add, 3),
    ButtonDef::digit(0, 4, 0).wide(2),
    ButtonDef::new(Key::Decimal, ButtonVariant::Default, 4, 2),
    ButtonDef::new(Key::Equals, ButtonVariant::Equal, 4, 3),
];
