//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::Readout;

/// Title of the outer panel
pub const TITLE: &str = " Calculator ";

/// Line shown under the keypad
pub const FOOTER: &str = "Perform basic arithmetic operations";

/// Outer panel size; the panel is centered in larger terminals
const PANEL_WIDTH: u16 = 40;
const PANEL_HEIGHT: u16 = 20;

/// Screen rectangles of the calculator parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Outer bordered panel
    pub panel: Rect,
    /// Readout panel
    pub display: Rect,
    /// Keypad widget
    pub keypad: Rect,
    /// Footer line
    pub footer: Rect,
}

/// Computes where each part is drawn inside `area`
#[must_use]
pub fn layout(area: Rect) -> CalculatorLayout {
    let width = area.width.min(PANEL_WIDTH);
    let height = area.height.min(PANEL_HEIGHT);
    let panel = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let inner = Block::default().borders(Borders::ALL).inner(panel);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Readout
            Constraint::Length(12), // Keypad
            Constraint::Length(1),  // Footer
        ])
        .split(inner);

    CalculatorLayout {
        panel,
        display: chunks[0],
        keypad: chunks[1],
        footer: chunks[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn readout_lines(readout: &Readout) -> Vec<Line<'_>> {
        let expression = readout.expression.as_deref().unwrap_or_default();
        let mut lines = vec![
            Line::from(Span::styled(
                expression,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                readout.value.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(error) = readout.error.as_deref() {
            lines.push(Line::from(Span::styled(
                error,
                Style::default().fg(Color::Red),
            )));
        }
        lines
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Self::readout_lines(self.app.readout()))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_footer(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(FOOTER, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let parts = layout(area);

        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(parts.panel, buf);

        self.render_display(parts.display, buf);
        KeypadWidget::new(self.app.keypad()).render(parts.keypad, buf);
        Self::render_footer(parts.footer, buf);
    }
}
