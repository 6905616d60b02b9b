//! TUI module for the interactive form.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Form, Action, Transition)
//! - `input`: The text input widget the form is made of
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `run`: Effects (terminal, threads, event loop)

pub mod input;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
