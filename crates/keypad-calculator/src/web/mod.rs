//! DOM frontend for the calculator
//!
//! Everything except `BrowserCalculator` runs against a [`MockDom`], so the
//! web keypad is tested natively. The `wasm` feature adds the wasm-bindgen
//! export used by the browser page.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{calculator_element, WebCalculator, DISPLAY_ID, ERROR_ID, EXPRESSION_ID};
pub use dom::{DomElement, DomEvent, MockDom, EVENT_HISTORY_LIMIT};
pub use driver::WebDriver;
pub use keypad::{button_id, WebButton, WebKeypad, KEYPAD_ID};
