//! Pure rendering: map App state to ratatui widget trees.
//!
//! Two views: the entry view (header, one line per input, help) and the
//! summary view (bordered two-column table, message, help). The table
//! text is built by plain string functions so it can be checked without
//! a terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::types::{COLUMN_LABELS, FIELD_COUNT};

use super::input::TextInput;
use super::state::{App, Form};
use super::theme;

pub const ENTRY_HEADER: &str = "Enter two values:";
pub const ENTRY_HELP: &str = "(press Enter to continue, Esc or Ctrl+C to quit)";
pub const SUMMARY_HELP: &str = "(press Esc or Ctrl+C to quit)";

/// Borders plus horizontal padding around the table text.
const TABLE_CHROME_WIDTH: u16 = 2 + 4;
/// Borders, vertical padding, header row and value row.
const TABLE_HEIGHT: u16 = 2 + 2 + 2;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current form to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    match &app.form {
        Form::Entering { inputs, .. } => render_entry(inputs, frame, area),
        Form::Summary { values } => {
            render_summary(values, app.config.column_width, frame, area)
        }
    }
}

// ============================================================================
// VIEW: ENTRY
// ============================================================================

fn render_entry(inputs: &[TextInput], frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(ENTRY_HEADER, theme::STYLE_TITLE)), Line::from("")];
    lines.extend(inputs.iter().map(TextInput::line));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(ENTRY_HELP, theme::STYLE_HELP)));

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// VIEW: SUMMARY
// ============================================================================

fn render_summary(values: &[String; FIELD_COUNT], column_width: usize, frame: &mut Frame, area: Rect) {
    let header = table_header(column_width);
    let row = table_row(values, column_width);

    // Terminal columns, not chars: CJK and emoji take two cells.
    let text_width = Line::from(header.as_str())
        .width()
        .max(Line::from(row.as_str()).width());
    let table_width = (text_width as u16)
        .saturating_add(TABLE_CHROME_WIDTH)
        .min(area.width);

    let chunks = Layout::vertical([
        Constraint::Length(TABLE_HEIGHT), // table
        Constraint::Length(1),            // message
        Constraint::Length(1),            // spacer
        Constraint::Length(1),            // help
        Constraint::Min(0),
    ])
    .split(area);

    let table_area = Rect {
        width: table_width,
        ..chunks[0]
    };
    let table = Paragraph::new(vec![
        Line::from(Span::styled(header, theme::STYLE_IMPORTANT)),
        Line::from(row),
    ])
    .block(
        Block::bordered()
            .border_style(theme::STYLE_BORDER)
            .padding(Padding::symmetric(2, 1)),
    );
    frame.render_widget(table, table_area);

    let message = Paragraph::new(Span::styled(summary_message(values), theme::STYLE_SUCCESS));
    frame.render_widget(message, chunks[1]);

    let help = Paragraph::new(Span::styled(SUMMARY_HELP, theme::STYLE_HELP));
    frame.render_widget(help, chunks[3]);
}

// ============================================================================
// TEXT HELPERS
// ============================================================================

/// Column labels, each left-justified to `width`. Long text is not truncated.
pub fn table_header(width: usize) -> String {
    justify(&COLUMN_LABELS.map(String::from), width)
}

/// Captured values, each left-justified to `width`.
pub fn table_row(values: &[String; FIELD_COUNT], width: usize) -> String {
    justify(values, width)
}

fn justify(cells: &[String; FIELD_COUNT], width: usize) -> String {
    cells
        .iter()
        .map(|cell| format!("{:<width$}", cell))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn summary_message(values: &[String; FIELD_COUNT]) -> String {
    format!("You entered '{}' and '{}' 🎉", values[0], values[1])
}

// ============================================================================
// TESTS
// ============================================================================
