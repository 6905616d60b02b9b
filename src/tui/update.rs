//! Pure state transitions: (Form, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Quit wins in every phase. Once the form is summarized, every other
//! action returns it unchanged.

use tracing::{debug, trace};

use crate::types::FIELD_COUNT;

use super::input::TextInput;
use super::state::{Action, Form, Transition};

/// Pure state transition function.
pub fn update(form: Form, action: &Action) -> Transition {
    if *action == Action::Quit {
        debug!(summary = form.is_summary(), "quit requested");
        return Transition::Quit;
    }

    match form {
        Form::Entering { inputs, focus } => update_entering(inputs, focus, action),
        Form::Summary { .. } => Transition::Form(form),
    }
}

// ============================================================================
// PER-PHASE HANDLERS
// ============================================================================

/// Entering: Enter advances focus or finishes; everything else goes to the inputs.
fn update_entering(mut inputs: [TextInput; FIELD_COUNT], focus: usize, action: &Action) -> Transition {
    match action {
        Action::Confirm if focus + 1 < inputs.len() => {
            let next = focus + 1;
            for (i, input) in inputs.iter_mut().enumerate() {
                if i == next {
                    input.focus();
                } else {
                    input.blur();
                }
            }
            debug!(from = focus, to = next, "focus advanced");
            Transition::Form(Form::Entering { inputs, focus: next })
        }
        Action::Confirm => {
            let values = inputs.map(|input| input.value());
            debug!(?values, "form completed");
            Transition::Form(Form::Summary { values })
        }
        _ => {
            // Blurred inputs drop the action themselves.
            for input in inputs.iter_mut() {
                input.update(action);
            }
            trace!(?action, focus, "forwarded to inputs");
            Transition::Form(Form::Entering { inputs, focus })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::types::FormConfig;

    fn fresh() -> Form {
        Form::new(&FormConfig::default())
    }

    /// Apply actions in order, panicking if any of them quits.
    fn apply(form: Form, actions: &[Action]) -> Form {
        actions.iter().fold(form, |form, action| match update(form, action) {
            Transition::Form(next) => next,
            Transition::Quit => panic!("unexpected quit on {:?}", action),
        })
    }

    fn typing(text: &str) -> Vec<Action> {
        text.chars().map(Action::Insert).collect()
    }

    #[test]
    fn typing_goes_to_focused_field_only() {
        let form = apply(fresh(), &typing("abc"));
        assert_eq!(form.values(), ["abc".to_string(), String::new()]);
    }

    #[test]
    fn confirm_on_first_field_moves_focus() {
        let form = apply(fresh(), &[Action::Confirm]);
        match &form {
            Form::Entering { inputs, focus } => {
                assert_eq!(*focus, 1);
                assert!(!inputs[0].is_focused());
                assert!(inputs[1].is_focused());
            }
            other => panic!("Expected Entering, got {:?}", other),
        }
        assert_eq!(form.focused_count(), 1);
    }

    #[test]
    fn typing_after_confirm_goes_to_second_field() {
        let mut actions = typing("abc");
        actions.push(Action::Confirm);
        actions.extend(typing("xyz"));
        let form = apply(fresh(), &actions);
        assert_eq!(form.values(), ["abc".to_string(), "xyz".to_string()]);
        assert_eq!(form.focus_index(), Some(1));
    }

    #[test]
    fn confirm_on_last_field_finishes() {
        let mut actions = typing("abc");
        actions.push(Action::Confirm);
        actions.extend(typing("xyz"));
        actions.push(Action::Confirm);
        let form = apply(fresh(), &actions);
        assert_eq!(
            form,
            Form::Summary {
                values: ["abc".to_string(), "xyz".to_string()]
            }
        );
    }

    #[test]
    fn two_confirms_finish_with_empty_values() {
        let form = apply(fresh(), &[Action::Confirm, Action::Confirm]);
        assert_eq!(
            form,
            Form::Summary {
                values: [String::new(), String::new()]
            }
        );
    }

    #[test]
    fn q_is_typed_not_quit() {
        let form = apply(fresh(), &[Action::Insert('q')]);
        assert_eq!(form.values()[0], "q");
        assert!(!form.is_summary());
    }

    #[test]
    fn quit_in_entry_mode() {
        assert_eq!(update(fresh(), &Action::Quit), Transition::Quit);
        let second = apply(fresh(), &[Action::Confirm]);
        assert_eq!(update(second, &Action::Quit), Transition::Quit);
    }

    #[test]
    fn quit_in_summary_mode() {
        let form = apply(fresh(), &[Action::Confirm, Action::Confirm]);
        assert_eq!(update(form, &Action::Quit), Transition::Quit);
    }

    #[test]
    fn summary_ignores_further_input() {
        let done = apply(fresh(), &[Action::Insert('a'), Action::Confirm, Action::Confirm]);
        let after = apply(
            done.clone(),
            &[
                Action::Insert('z'),
                Action::Backspace,
                Action::Confirm,
                Action::BlinkTick,
                Action::Resize,
            ],
        );
        assert_eq!(after, done);
    }

    #[test]
    fn blink_only_affects_focused_field() {
        let form = apply(fresh(), &[Action::BlinkTick]);
        match form {
            Form::Entering { inputs, .. } => {
                assert!(!inputs[0].cursor_visible());
                assert!(inputs[0].is_focused());
                assert!(!inputs[1].cursor_visible());
            }
            other => panic!("Expected Entering, got {:?}", other),
        }
    }

    #[test]
    fn resize_is_noop() {
        assert_eq!(apply(fresh(), &[Action::Resize]), fresh());
    }

    fn editing_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            any::<char>().prop_map(Action::Insert),
            Just(Action::Backspace),
            Just(Action::Delete),
            Just(Action::CursorLeft),
            Just(Action::CursorRight),
            Just(Action::CursorStart),
            Just(Action::CursorEnd),
            Just(Action::BlinkTick),
            Just(Action::Resize),
            Just(Action::Confirm),
        ]
    }

    proptest! {
        #[test]
        fn typed_chars_concatenate(text in "\\PC{0,40}") {
            let values = apply(fresh(), &typing(&text)).values();
            prop_assert_eq!(values[0].as_str(), text.as_str());
            prop_assert_eq!(values[1].as_str(), "");
        }

        #[test]
        fn exactly_one_field_focused_while_entering(
            actions in prop::collection::vec(editing_action(), 0..60)
        ) {
            let mut form = fresh();
            for action in &actions {
                form = match update(form, action) {
                    Transition::Form(next) => next,
                    Transition::Quit => unreachable!(),
                };
                let expected = if form.is_summary() { 0 } else { 1 };
                prop_assert_eq!(form.focused_count(), expected);
            }
        }

        #[test]
        fn summary_is_frozen(
            first in "[a-z]{0,10}",
            second in "[a-z]{0,10}",
            actions in prop::collection::vec(editing_action(), 0..30)
        ) {
            let mut script = typing(&first);
            script.push(Action::Confirm);
            script.extend(typing(&second));
            script.push(Action::Confirm);
            let done = apply(fresh(), &script);
            prop_assert_eq!(apply(done.clone(), &actions), done);
        }
    }
}
