//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the input line and the rendering layer.
//!
//! Color semantics:
//! - Cyan: interactive elements (prompt marker)
//! - Green: success (summary message)
//! - Dim: de-emphasized (placeholders, help, borders)
//! - Bold: important (header, column labels)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Success — green.
pub const STYLE_SUCCESS: Style = Style::new().fg(Color::Green);

/// Interactive element — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// "Enter two values:" header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Prompt marker before each field.
pub const STYLE_PROMPT: Style = STYLE_INTERACTIVE;

/// Typed text.
pub const STYLE_VALUE: Style = Style::new();

/// Placeholder in an empty field.
pub const STYLE_PLACEHOLDER: Style = STYLE_DIM;

/// The cell under a visible cursor.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Summary table border.
pub const STYLE_BORDER: Style = STYLE_DIM;

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_SUCCESS.fg, Some(Color::Green));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn cursor_style_is_reversed() {
        assert!(STYLE_CURSOR.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn placeholder_is_dimmer_than_value() {
        assert_eq!(STYLE_PLACEHOLDER.fg, Some(Color::DarkGray));
        assert_eq!(STYLE_VALUE.fg, None);
    }
}
