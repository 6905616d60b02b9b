//! Domain types for two-value-form.
//!
//! The form is deliberately fixed: two fields, one prompt marker, one
//! column width. `FormConfig` gathers those constants in one place so the
//! pure layers never hard-code them.

use std::time::Duration;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of input fields in the form.
pub const FIELD_COUNT: usize = 2;

/// Placeholders shown in empty fields, in field order.
pub const PLACEHOLDERS: [&str; FIELD_COUNT] = ["First value", "Second value"];

/// Column labels in the summary table, in field order.
pub const COLUMN_LABELS: [&str; FIELD_COUNT] = ["Input 1", "Input 2"];

/// Prompt marker drawn before every field.
pub const PROMPT: &str = "> ";

// ============================================================================
// CONFIG
// ============================================================================

/// Layout and timing knobs for the form.
///
/// Not user-configurable: the binary always runs with `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Prompt marker drawn before each field's value.
    pub prompt: String,
    /// Placeholder text per field.
    pub placeholders: [String; FIELD_COUNT],
    /// Width of each left-justified summary column.
    pub column_width: usize,
    /// Cursor blink period.
    pub blink_interval: Duration,
    /// Height of the inline viewport the form is painted into.
    pub viewport_height: u16,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            placeholders: PLACEHOLDERS.map(String::from),
            column_width: 20,
            blink_interval: Duration::from_millis(530),
            viewport_height: 9,
        }
    }
}
