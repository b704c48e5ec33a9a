//! Browser bindings for the calculator
//!
//! The page renders the keypad from [`BrowserCalculator::buttons`] and
//! forwards each click's element ID to [`BrowserCalculator::click`].

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::WebCalculator;
use crate::core::CalcResult;

/// Browser calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WebCalculator,
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WebCalculator::new(),
        }
    }

    /// Press a button by its label, e.g. `"7"` or `"÷"`.
    ///
    /// Returns false when the press was rejected.
    pub fn press(&mut self, label: &str) -> bool {
        report(self.inner.press(label))
    }

    /// Handle a click on the element with the given ID.
    ///
    /// Returns false when the click was rejected.
    pub fn click(&mut self, button_id: &str) -> bool {
        report(self.inner.click(button_id))
    }

    /// Clear the calculator
    pub fn clear(&mut self) {
        self.inner.reset();
    }

    /// The value line
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.inner.display()
    }

    /// The pending-expression preview, empty when idle
    #[wasm_bindgen(getter)]
    pub fn expression(&self) -> String {
        self.inner.expression().unwrap_or_default()
    }

    /// The error line, empty when the last press succeeded
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> String {
        self.inner.error().unwrap_or_default()
    }

    /// Button element IDs in layout order
    pub fn buttons(&self) -> Vec<String> {
        self.inner
            .keypad()
            .buttons()
            .iter()
            .map(|b| b.id.clone())
            .collect()
    }
}

fn report(result: CalcResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            console::warn_1(&JsValue::from_str(&err.to_string()));
            false
        }
    }
}
