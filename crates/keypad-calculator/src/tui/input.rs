//! Terminal input handling
//!
//! The keypad is mouse-driven. Keyboard input is only used to leave the app.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Left mouse button went down at a screen position
    Click {
        /// Screen column
        column: u16,
        /// Screen row
        row: u16,
    },
    /// Left mouse button went up
    Release,
    /// Terminal was resized
    Resize {
        /// New width
        width: u16,
        /// New height
        height: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps crossterm events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> UiAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(width, height) => UiAction::Resize {
                width: *width,
                height: *height,
            },
            _ => UiAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> UiAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows reports both press and release
        if kind != KeyEventKind::Press {
            return UiAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => UiAction::Quit,
                _ => UiAction::None,
            };
        }

        match code {
            KeyCode::Esc | KeyCode::Char('q') => UiAction::Quit,
            _ => UiAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> UiAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => UiAction::Click {
                column: event.column,
                row: event.row,
            },
            MouseEventKind::Up(MouseButton::Left) => UiAction::Release,
            _ => UiAction::None,
        }
    }
}
