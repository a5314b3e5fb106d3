use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::board::MoodBoard;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Focus {
    Input,
    Board,
}

pub(crate) struct TuiState {
    pub(crate) input: InputState,
    pub(crate) board: MoodBoard,
    pub(crate) focus: Focus,
    pub(crate) board_index: Option<usize>,
}

impl TuiState {
    pub(crate) fn new() -> Self {
        Self {
            input: InputState::new(),
            board: MoodBoard::new(),
            focus: Focus::Input,
            board_index: None,
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Board,
            Focus::Board => Focus::Input,
        };
        self.clamp_selection();
    }

    pub(crate) fn move_selection_up(&mut self) {
        match self.board_index {
            Some(current) => self.board_index = Some(current.saturating_sub(1)),
            None => self.clamp_selection(),
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        match self.board_index {
            Some(current) => {
                let max_index = self.board.entries().len().saturating_sub(1);
                self.board_index = Some((current + 1).min(max_index));
            }
            None => self.clamp_selection(),
        }
    }

    /// Keeps the selection inside the board after entries come or go.
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.board.entries().len();
        self.board_index = match (len, self.board_index) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(index)) => Some(index.min(len - 1)),
        };
    }
}

/// Single-line mood input with a character cursor.
pub(crate) struct InputState {
    text: String,
    cursor: usize,
}

impl InputState {
    fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        let at = self.byte_index();
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
    }

    pub(crate) fn delete_char(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Terminal position of the cursor inside a bordered `area`.
    pub(crate) fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let content_width = area.width.saturating_sub(2).max(1) as usize;
        let col = self.width_before_cursor().min(content_width - 1);
        (area.x + col as u16 + 1, area.y + 1)
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }

    fn width_before_cursor(&self) -> usize {
        if self.cursor >= self.len() {
            return UnicodeWidthStr::width(self.text.as_str());
        }
        self.text
            .chars()
            .take(self.cursor)
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }
}
