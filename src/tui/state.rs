//! TUI state algebra: pure types, zero effects.
//!
//! The form is a two-state machine. While entering, it owns the live
//! inputs and the focus index. Once the last field is confirmed it
//! collapses into the captured strings, so nothing can edit them anymore.

use crossterm::event::KeyEvent;

use crate::types::{FIELD_COUNT, FormConfig};

use super::input::TextInput;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key`, `Resize` and `InputError`
/// - A ticker thread sends `Tick` at the blink interval
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized. The next draw picks up the new size.
    Resize,
    /// Cursor blink timer fired.
    Tick,
    /// The key reader failed and stopped.
    InputError(String),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current form phase.
    pub form: Form,

    /// Layout and timing constants.
    pub config: FormConfig,

    /// Set to true when the loop should exit without another repaint.
    pub should_quit: bool,
}

// ============================================================================
// FORM
// ============================================================================

/// The form state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    /// Fields are editable. Exactly `inputs[focus]` is focused.
    Entering {
        inputs: [TextInput; FIELD_COUNT],
        focus: usize,
    },

    /// Both fields confirmed. Read-only.
    Summary { values: [String; FIELD_COUNT] },
}

/// Fresh entry form with default config (placeholder during transitions).
impl Default for Form {
    fn default() -> Self {
        Form::new(&FormConfig::default())
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Insert a printable character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Jump to the start of the value.
    CursorStart,
    /// Jump to the end of the value.
    CursorEnd,
    /// Delete everything before the cursor.
    DeleteToStart,
    /// Delete everything from the cursor on.
    DeleteToEnd,
    /// Enter: advance focus or finish.
    Confirm,
    /// Leave the program.
    Quit,
    /// Cursor blink timer.
    BlinkTick,
    /// Terminal resized. Layout is recomputed on every draw anyway.
    Resize,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep running with this form.
    Form(Form),
    /// Stop the event loop.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    pub fn new(config: FormConfig) -> Self {
        App {
            form: Form::new(&config),
            config,
            should_quit: false,
        }
    }
}

impl Form {
    /// Entry form with the first field focused.
    pub fn new(config: &FormConfig) -> Self {
        let mut inputs: [TextInput; FIELD_COUNT] =
            std::array::from_fn(|i| TextInput::new(&config.prompt, &config.placeholders[i]));
        inputs[0].focus();
        Form::Entering { inputs, focus: 0 }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Form::Summary { .. })
    }
}

#[cfg(test)]
impl Form {
    /// Index of the focused field, or None once summarized.
    pub(crate) fn focus_index(&self) -> Option<usize> {
        match self {
            Form::Entering { focus, .. } => Some(*focus),
            Form::Summary { .. } => None,
        }
    }

    /// Current values in field order, whichever phase the form is in.
    pub(crate) fn values(&self) -> [String; FIELD_COUNT] {
        match self {
            Form::Entering { inputs, .. } => std::array::from_fn(|i| inputs[i].value()),
            Form::Summary { values } => values.clone(),
        }
    }

    /// Number of fields currently holding focus.
    pub(crate) fn focused_count(&self) -> usize {
        match self {
            Form::Entering { inputs, .. } => inputs.iter().filter(|i| i.is_focused()).count(),
            Form::Summary { .. } => 0,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
