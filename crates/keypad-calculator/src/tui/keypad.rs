//! Clickable keypad for the terminal calculator
//!
//! Visual feedback: the button under the mouse is highlighted until the
//! button is released.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonDef, ButtonVariant, Key, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};

/// A keypad button with its highlight state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Layout entry for this button
    pub def: ButtonDef,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Returns the key this button presses
    #[must_use]
    pub fn key(&self) -> Key {
        self.def.key
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.def.variant {
            ButtonVariant::Default => Style::default().fg(Color::White),
            ButtonVariant::Operation => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Equal => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Clear => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}

/// The 4x5 keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_LAYOUT
            .iter()
            .map(|def| KeypadButton {
                def: *def,
                pressed: false,
            })
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn get_button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.position_at(row, col).map(|i| &self.buttons[i])
    }

    fn position_at(&self, row: u16, col: u16) -> Option<usize> {
        self.buttons.iter().position(|b| b.def.covers(row, col))
    }

    /// Finds the index of the button for `key`
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.def.key == key)
    }

    /// Highlights one button and releases the rest
    pub fn press_button(&mut self, index: usize) {
        for (i, btn) in self.buttons.iter_mut().enumerate() {
            btn.set_pressed(i == index);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Returns the index of the highlighted button
    #[must_use]
    pub fn pressed_button(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let grid = Grid::new(area)?;
        let (row, col) = grid.cell_at(x, y)?;
        self.position_at(row, col)
    }

    /// Returns a screen position inside the button for `key`, for
    /// simulating clicks
    #[must_use]
    pub fn button_center(&self, area: Rect, key: Key) -> Option<(u16, u16)> {
        let grid = Grid::new(area)?;
        let btn = &self.buttons[self.find_button(key)?];
        let (x, y, width, height) = grid.button_rect(&btn.def);
        Some((x + width / 2, y + height / 2))
    }
}

/// Cell geometry of the keypad inside its bordered area
#[derive(Debug, Clone, Copy)]
struct Grid {
    inner: Rect,
    cell_width: u16,
    cell_height: u16,
}

impl Grid {
    /// Returns `None` when the area is too small to hold one cell per button
    fn new(area: Rect) -> Option<Self> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let cell_width = inner.width / KEYPAD_COLS;
        let cell_height = inner.height / KEYPAD_ROWS;
        (cell_width > 0 && cell_height > 0).then_some(Self {
            inner,
            cell_width,
            cell_height,
        })
    }

    fn cell_at(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if x < self.inner.x || y < self.inner.y {
            return None;
        }
        let col = (x - self.inner.x) / self.cell_width;
        let row = (y - self.inner.y) / self.cell_height;
        (row < KEYPAD_ROWS && col < KEYPAD_COLS).then_some((row, col))
    }

    fn button_rect(&self, def: &ButtonDef) -> (u16, u16, u16, u16) {
        (
            self.inner.x + def.col * self.cell_width,
            self.inner.y + def.row * self.cell_height,
            def.span * self.cell_width,
            self.cell_height,
        )
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let Some(grid) = Grid::new(area) else {
            return; // Too small to render
        };

        for btn in self.keypad.buttons() {
            let (x, y, width, height) = grid.button_rect(&btn.def);
            let label = format!("[{}]", btn.def.key.label());
            let label_width = label.chars().count() as u16;
            if label_width > width {
                continue;
            }
            let label_x = x + (width - label_width) / 2;
            let label_y = y + height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, btn.style()), width);
        }
    }
}
