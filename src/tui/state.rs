use crate::config::Config;
use crate::model::{Change, TodoId, TodoList};
use crate::tui::action::Action;
use ratatui::widgets::ListState;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Typing,
}

pub struct AppState {
    pub list: TodoList,
    pub list_state: ListState,
    pub mode: InputMode,
    /// Cursor in the pending text, counted in chars.
    pub cursor_position: usize,
    pub message: String,
    pub config: Config,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            list: TodoList::new(),
            list_state: ListState::default(),
            mode: InputMode::Typing,
            cursor_position: 0,
            message: "Type a to-do and press Enter".to_string(),
            config,
            quit: false,
        }
    }

    pub fn apply(&mut self, action: Action) -> Change {
        match action {
            Action::Quit => {
                self.quit = true;
                Change::Unchanged
            }
            Action::StartTyping => {
                self.mode = InputMode::Typing;
                self.cursor_position = self.pending_len();
                self.message = "Enter: Add | Esc: Back to list".to_string();
                Change::Unchanged
            }
            Action::StopTyping => {
                self.mode = InputMode::Normal;
                self.message = format!("Items: {}", self.list.len());
                Change::Unchanged
            }
            Action::InsertChar(c) => self.enter_char(c),
            Action::Backspace => self.delete_char(),
            Action::CursorLeft => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Change::Unchanged
            }
            Action::CursorRight => {
                self.cursor_position = self.clamp_cursor(self.cursor_position.saturating_add(1));
                Change::Unchanged
            }
            Action::Submit => self.submit(),
            Action::Next => {
                self.next();
                Change::Unchanged
            }
            Action::Previous => {
                self.previous();
                Change::Unchanged
            }
            Action::PageDown => {
                self.jump_forward(self.config.page_step);
                Change::Unchanged
            }
            Action::PageUp => {
                self.jump_backward(self.config.page_step);
                Change::Unchanged
            }
            Action::ToggleSelected => match self.selected_id() {
                Some(id) => self.list.toggle_completed(id),
                None => Change::Unchanged,
            },
            Action::DeleteSelected => match self.selected_id() {
                Some(id) => {
                    let change = self.list.delete_item(id);
                    self.clamp_selection();
                    self.message = format!("Deleted. Items: {}", self.list.len());
                    change
                }
                None => Change::Unchanged,
            },
        }
    }

    fn submit(&mut self) -> Change {
        let change = self.list.add_pending();
        if let Change::Added(_) = change {
            self.cursor_position = 0;
            self.message = format!("Added. Items: {}", self.list.len());
            if self.list_state.selected().is_none() {
                self.list_state.select(Some(0));
            }
        }
        change
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        let idx = self.list_state.selected()?;
        self.list.items().get(idx).map(|t| t.id())
    }

    fn pending_len(&self) -> usize {
        self.list.pending_text().chars().count()
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.min(self.pending_len())
    }

    fn enter_char(&mut self, new_char: char) -> Change {
        let mut text: String = self.list.pending_text().to_string();
        let byte_idx = text
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        text.insert(byte_idx, new_char);
        let change = self.list.set_pending_text(text);
        self.cursor_position = self.clamp_cursor(self.cursor_position + 1);
        change
    }

    fn delete_char(&mut self) -> Change {
        if self.cursor_position == 0 {
            return Change::Unchanged;
        }
        let current = self.cursor_position;
        let text = self.list.pending_text();
        let before = text.chars().take(current - 1);
        let after = text.chars().skip(current);
        let updated: String = before.chain(after).collect();
        let change = self.list.set_pending_text(updated);
        self.cursor_position = current - 1;
        change
    }

    fn clamp_selection(&mut self) {
        let len = self.list.len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn next(&mut self) {
        let len = self.list.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.list.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) => len - 1,
            Some(i) => i - 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.list.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (don't wrap around like next())
        let new_index = (current + step).min(self.list.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.list.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(step)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: &mut AppState, s: &str) {
        for c in s.chars() {
            state.apply(Action::InsertChar(c));
        }
    }

    fn state_with(texts: &[&str]) -> AppState {
        let mut state = AppState::new(Config::default());
        for t in texts {
            typed(&mut state, t);
            state.apply(Action::Submit);
        }
        state.apply(Action::StopTyping);
        state
    }

    #[test]
    fn typing_edits_pending_text() {
        let mut state = AppState::new(Config::default());
        typed(&mut state, "hllo");
        state.apply(Action::CursorLeft);
        state.apply(Action::CursorLeft);
        state.apply(Action::CursorLeft);
        typed(&mut state, "e");
        assert_eq!(state.list.pending_text(), "hello");

        state.apply(Action::CursorRight);
        state.apply(Action::Backspace);
        assert_eq!(state.list.pending_text(), "helo");
    }

    #[test]
    fn multibyte_input_is_handled() {
        let mut state = AppState::new(Config::default());
        typed(&mut state, "café");
        state.apply(Action::CursorLeft);
        typed(&mut state, "!");
        assert_eq!(state.list.pending_text(), "caf!é");
        state.apply(Action::Backspace);
        state.apply(Action::Backspace);
        assert_eq!(state.list.pending_text(), "caé");
    }

    #[test]
    fn blank_submit_is_silent() {
        let mut state = AppState::new(Config::default());
        typed(&mut state, "   ");
        let msg = state.message.clone();
        assert_eq!(state.apply(Action::Submit), Change::Unchanged);
        assert!(state.list.is_empty());
        assert_eq!(state.list.pending_text(), "   ");
        assert_eq!(state.message, msg);
    }

    #[test]
    fn submit_selects_first_item() {
        let state = state_with(&["one"]);
        assert_eq!(state.list_state.selected(), Some(0));
        assert_eq!(state.cursor_position, 0);
        assert_eq!(state.list.pending_text(), "");
    }

    #[test]
    fn toggle_and_delete_follow_selection() {
        let mut state = state_with(&["a", "b", "c"]);
        state.apply(Action::Next);
        state.apply(Action::ToggleSelected);
        assert!(state.list.items()[1].completed());

        state.apply(Action::Next);
        state.apply(Action::DeleteSelected);
        let texts: Vec<&str> = state.list.items().iter().map(|t| t.text()).collect();
        assert_eq!(texts, ["a", "b"]);
        // selection clamped onto the new last row
        assert_eq!(state.list_state.selected(), Some(1));

        state.apply(Action::DeleteSelected);
        state.apply(Action::DeleteSelected);
        assert!(state.list.is_empty());
        assert_eq!(state.list_state.selected(), None);
        assert_eq!(state.apply(Action::ToggleSelected), Change::Unchanged);
    }

    #[test]
    fn navigation_wraps_and_pages_clamp() {
        let mut state = state_with(&["a", "b", "c"]);
        state.apply(Action::Previous);
        assert_eq!(state.list_state.selected(), Some(2));
        state.apply(Action::Next);
        assert_eq!(state.list_state.selected(), Some(0));
        state.apply(Action::PageDown);
        assert_eq!(state.list_state.selected(), Some(2));
        state.apply(Action::PageUp);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = AppState::new(Config::default());
        state.apply(Action::Quit);
        assert!(state.quit);
    }
}
