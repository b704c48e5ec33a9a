//! Keypad buttons for the DOM frontend
//!
//! Mirrors the terminal keypad: same grid, same variants. Each button
//! becomes a `<button>` element with a stable id and a `data-key` label.

use super::dom::DomElement;
use crate::core::{ButtonDef, CalcError, CalcResult, Key, KEYPAD_COLS, KEYPAD_LAYOUT};

/// ID of the element holding the buttons
pub const KEYPAD_ID: &str = "calc-keypad";

/// Class applied to buttons spanning two columns
const WIDE_CLASS: &str = "col-span-2";

/// Returns the element ID for a key's button
#[must_use]
pub fn button_id(key: Key) -> String {
    match key {
        Key::Digit(d) => format!("btn-{d}"),
        Key::Decimal => "btn-decimal".to_string(),
        Key::Operator(op) => format!("btn-{}", op.name()),
        Key::Equals => "btn-equals".to_string(),
        Key::Clear => "btn-clear".to_string(),
        Key::Percent => "btn-percent".to_string(),
        Key::ToggleSign => "btn-toggle-sign".to_string(),
    }
}

/// A keypad button with its element ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebButton {
    /// Layout entry for this button
    pub def: ButtonDef,
    /// The DOM element ID for this button
    pub id: String,
}

impl WebButton {
    fn new(def: ButtonDef) -> Self {
        Self {
            id: button_id(def.key),
            def,
        }
    }

    /// Creates the `<button>` element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let label = self.def.key.label();
        let elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(label)
            .with_class("keypad-btn")
            .with_class(self.def.variant.css_class())
            .with_attr("type", "button")
            .with_attr("data-key", label)
            .with_attr("data-row", &self.def.row.to_string())
            .with_attr("data-col", &self.def.col.to_string());
        if self.def.span > 1 {
            elem.with_class(WIDE_CLASS)
        } else {
            elem
        }
    }
}

/// The web keypad: the shared layout with element IDs attached
#[derive(Debug, Clone)]
pub struct WebKeypad {
    buttons: Vec<WebButton>,
}

impl Default for WebKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WebKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: KEYPAD_LAYOUT.iter().copied().map(WebButton::new).collect(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all buttons
    #[must_use]
    pub fn buttons(&self) -> &[WebButton] {
        &self.buttons
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&WebButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button for a key
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<&WebButton> {
        self.buttons.iter().find(|b| b.def.key == key)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(WebButton::to_element).collect()
    }

    /// Creates the grid container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements().into_iter().fold(
            DomElement::new("div")
                .with_id(KEYPAD_ID)
                .with_class("grid")
                .with_class(&format!("grid-cols-{KEYPAD_COLS}")),
            DomElement::with_child,
        )
    }

    /// Maps a clicked element ID to the key it presses
    pub fn handle_click(&self, element_id: &str) -> CalcResult<Key> {
        self.find_button_by_id(element_id)
            .map(|btn| btn.def.key)
            .ok_or_else(|| CalcError::UnknownKey(element_id.to_string()))
    }
}
