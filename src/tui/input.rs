//! Single-line text input with a prompt, placeholder and blinking cursor.
//!
//! The value is stored as chars so the cursor indexes characters, not
//! bytes. Only a focused input reacts to editing; blurred inputs ignore
//! everything, including blink ticks.

use ratatui::text::{Line, Span};

use super::state::Action;
use super::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    prompt: String,
    placeholder: String,
    value: Vec<char>,
    /// Char index in `0..=value.len()`.
    cursor: usize,
    focused: bool,
    /// Blink phase. Only meaningful while focused.
    cursor_visible: bool,
}

impl TextInput {
    pub fn new(prompt: &str, placeholder: &str) -> Self {
        TextInput {
            prompt: prompt.to_string(),
            placeholder: placeholder.to_string(),
            value: Vec::new(),
            cursor: 0,
            focused: false,
            cursor_visible: false,
        }
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn cursor_visible(&self) -> bool {
        self.focused && self.cursor_visible
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.cursor_visible = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.cursor_visible = false;
    }

    /// Apply an action. Blurred inputs ignore it.
    pub fn update(&mut self, action: &Action) {
        if !self.focused {
            return;
        }

        match action {
            Action::Insert(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += 1;
            }
            Action::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.cursor);
                }
            }
            Action::Delete => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                }
            }
            Action::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorRight => self.cursor = (self.cursor + 1).min(self.value.len()),
            Action::CursorStart => self.cursor = 0,
            Action::CursorEnd => self.cursor = self.value.len(),
            Action::DeleteToStart => {
                self.value = self.value.split_off(self.cursor);
                self.cursor = 0;
            }
            Action::DeleteToEnd => self.value.truncate(self.cursor),
            Action::BlinkTick => {
                self.cursor_visible = !self.cursor_visible;
                return;
            }
            Action::Confirm | Action::Quit | Action::Resize => return,
        }

        // Any edit or motion shows the cursor again, like a reset blink timer.
        self.cursor_visible = true;
    }

    /// Render as a single line: prompt, then value or placeholder.
    pub fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(self.prompt.clone(), theme::STYLE_PROMPT)];
        let show_cursor = self.cursor_visible();

        if self.value.is_empty() {
            let mut chars = self.placeholder.chars();
            if show_cursor {
                let first = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
                spans.push(Span::styled(first, theme::STYLE_CURSOR));
            }
            spans.push(Span::styled(chars.collect::<String>(), theme::STYLE_PLACEHOLDER));
            return Line::from(spans);
        }

        let head: String = self.value[..self.cursor].iter().collect();
        spans.push(Span::styled(head, theme::STYLE_VALUE));

        if show_cursor {
            let under = self.value.get(self.cursor).copied().unwrap_or(' ');
            spans.push(Span::styled(under.to_string(), theme::STYLE_CURSOR));
            let tail: String = self.value.iter().skip(self.cursor + 1).collect();
            spans.push(Span::styled(tail, theme::STYLE_VALUE));
        } else {
            let tail: String = self.value[self.cursor..].iter().collect();
            spans.push(Span::styled(tail, theme::STYLE_VALUE));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
impl TextInput {
    pub(crate) fn prompt(&self) -> &str {
        &self.prompt
    }

    pub(crate) fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_focused(&self) -> bool {
        self.focused
    }
}
