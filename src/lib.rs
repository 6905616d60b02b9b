//! two-value-form: an interactive terminal form for two values.

pub mod error;
pub mod logging;
pub mod tui;
pub mod types;
