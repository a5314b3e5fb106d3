use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{Focus, TuiState};
use crate::board::BoardWorker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Quit,
    ToggleFocus,
    Submit,
    Refresh,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Home,
    End,
    Backspace,
    Delete,
    InsertChar(char),
}

/// Applies `key` to the state. Returns `true` when the board should close.
pub(crate) fn handle_tui_key(worker: &BoardWorker, state: &mut TuiState, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key_to_action(&key, state.focus) {
        Some(action) => apply_action(worker, state, action),
        None => false,
    }
}

fn key_to_action(key: &KeyEvent, focus: Focus) -> Option<Action> {
    let code = key.code;
    let modifiers = key.modifiers;

    if matches!(
        (code, modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _)
    ) {
        return Some(Action::Quit);
    }

    if matches!((code, modifiers), (KeyCode::Char('r'), KeyModifiers::CONTROL)) {
        return Some(Action::Refresh);
    }

    if matches!(code, KeyCode::Tab) {
        return Some(Action::ToggleFocus);
    }

    match (focus, code) {
        (_, KeyCode::Up) => Some(Action::MoveUp),
        (_, KeyCode::Down) => Some(Action::MoveDown),
        (Focus::Board, KeyCode::Char('q') | KeyCode::Char('Q')) => Some(Action::Quit),
        (Focus::Board, KeyCode::Char('r')) => Some(Action::Refresh),
        (Focus::Board, KeyCode::Char('k')) => Some(Action::MoveUp),
        (Focus::Board, KeyCode::Char('j')) => Some(Action::MoveDown),
        (Focus::Board, _) => None,
        (Focus::Input, KeyCode::Enter) => Some(Action::Submit),
        (Focus::Input, KeyCode::Left) => Some(Action::MoveLeft),
        (Focus::Input, KeyCode::Right) => Some(Action::MoveRight),
        (Focus::Input, KeyCode::Home) => Some(Action::Home),
        (Focus::Input, KeyCode::End) => Some(Action::End),
        (Focus::Input, KeyCode::Backspace) => Some(Action::Backspace),
        (Focus::Input, KeyCode::Delete) => Some(Action::Delete),
        (Focus::Input, KeyCode::Char(ch)) => Some(Action::InsertChar(ch)),
        (Focus::Input, _) => None,
    }
}

fn apply_action(worker: &BoardWorker, state: &mut TuiState, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::ToggleFocus => state.toggle_focus(),
        Action::Submit => submit_input_if_ready(worker, state),
        Action::Refresh => {
            state.board.begin_refresh();
            worker.refresh();
        }
        Action::MoveUp => state.move_selection_up(),
        Action::MoveDown => state.move_selection_down(),
        Action::MoveLeft => state.input.move_left(),
        Action::MoveRight => state.input.move_right(),
        Action::Home => state.input.move_home(),
        Action::End => state.input.move_end(),
        Action::Backspace => state.input.backspace(),
        Action::Delete => state.input.delete_char(),
        Action::InsertChar(ch) => state.input.insert_char(ch),
    }
    false
}

fn submit_input_if_ready(worker: &BoardWorker, state: &mut TuiState) {
    let Some(submission) = state.board.begin_submit(state.input.text()) else {
        return;
    };
    state.input.clear();
    state.clamp_selection();
    worker.create(submission);
}
