//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key and resize events
//! - Ticker thread: sends a blink tick every `blink_interval`
//! The event loop consumes from the channel, dispatching to `update`.
//!
//! The form is painted into an inline viewport rather than the alternate
//! screen, so the last frame (usually the summary) stays in the scrollback.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::{Terminal, TerminalOptions, Viewport};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::types::FormConfig;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

type FormTerminal = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for releases and keys that don't map to any action.
/// Plain letters, `q` included, are always text.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::CursorStart),
            KeyCode::Char('e') => Some(Action::CursorEnd),
            KeyCode::Char('u') => Some(Action::DeleteToStart),
            KeyCode::Char('k') => Some(Action::DeleteToEnd),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorStart),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Action::Insert(c)),
        _ => None,
    }
}

/// Map a channel event to an Action. Reader failures become errors.
fn map_event(event: AppEvent) -> Result<Option<Action>> {
    match event {
        AppEvent::Key(key) => Ok(map_key(key)),
        AppEvent::Tick => Ok(Some(Action::BlinkTick)),
        AppEvent::Resize => Ok(Some(Action::Resize)),
        AppEvent::InputError(message) => Err(Error::Input(message)),
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal: raw mode plus an inline viewport.
///
/// The inline viewport queries the cursor position, which fails on
/// terminals that never answer. Raw mode is undone before that error
/// propagates.
fn setup_terminal(height: u16) -> io::Result<FormTerminal> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    );
    undo_on_error(terminal, disable_raw_mode)
}

/// Run `undo` if `result` is an error, keeping the original error.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if let Err(e) = &result {
        error!(error = %e, "terminal setup failed");
        // Best-effort: the setup error is the one worth reporting.
        let _ = undo();
    }
    result
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(Show)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue, // mouse, focus, paste
                Err(e) => {
                    error!(error = %e, "key reader failed");
                    let _ = tx.send(AppEvent::InputError(e.to_string()));
                    break;
                }
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

/// Spawn a thread that sends a blink tick every `interval`.
fn spawn_ticker(interval: Duration, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the form until the user quits.
///
/// Sets up the terminal, spawns the producers, and restores the terminal
/// whether the loop ends normally or with an error.
pub fn run(config: FormConfig) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal(config.viewport_height)?;
    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_key_reader(tx.clone());
    spawn_ticker(app.config.blink_interval, tx);

    info!("form started");
    let outcome = event_loop(&mut terminal, &mut app, &rx);

    restore_terminal()?;
    // Leave the shell prompt below the last frame.
    println!();

    match &outcome {
        Ok(()) => info!("form closed"),
        Err(e) => error!(error = %e, "form aborted"),
    }
    outcome
}

fn event_loop(terminal: &mut FormTerminal, app: &mut App, rx: &mpsc::Receiver<AppEvent>) -> Result<()> {
    loop {
        terminal.draw(|frame| render(&*app, frame))?;

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => {
                debug!("all producers stopped");
                return Ok(());
            }
        };

        if let Some(action) = map_event(event)? {
            apply(app, &action);
        }

        // Quit skips the repaint so the last frame stays on screen.
        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run one action through the pure transition and store the result.
pub fn apply(app: &mut App, action: &Action) {
    let form = std::mem::take(&mut app.form);
    let was_summary = form.is_summary();
    match update(form, action) {
        Transition::Form(next) => {
            if next.is_summary() && !was_summary {
                info!("form completed");
            }
            app.form = next;
        }
        Transition::Quit => {
            app.should_quit = true;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
