use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{Focus, TuiState};
use crate::{
    board::BoardEntry,
    format::{format_display_time, format_mood_line},
};

const PLACEHOLDER: &str = "Type a mood: calm, excited, overwhelmed...";
const SYNCING_LABEL: &str = " syncing…";

pub(crate) fn draw_tui(frame: &mut Frame<'_>, state: &TuiState) {
    let [input_area, board_area] = split_layout(frame.area());

    draw_input(frame, state, input_area);
    draw_board(frame, state, board_area);
}

fn draw_input(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let line = if state.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(state.input.text())
    };
    let input_widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(input_title(state))
            .border_style(focus_style(state.focus, Focus::Input)),
    );
    frame.render_widget(input_widget, area);
    if matches!(state.focus, Focus::Input) {
        frame.set_cursor_position(state.input.cursor_position(area));
    }
}

fn draw_board(frame: &mut Frame<'_>, state: &TuiState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(board_title(state))
        .border_style(focus_style(state.focus, Focus::Board));

    if state.board.is_loading() {
        frame.render_widget(Paragraph::new("Loading your moods…").block(block), area);
        return;
    }
    if state.board.entries().is_empty() {
        let hint = Paragraph::new(vec![
            Line::from("No moods yet. Start with the first one"),
            Line::from(Span::styled(
                "Think \"How would I describe this moment in one line?\"",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = state
        .board
        .entries()
        .iter()
        .map(|entry| board_item(entry, width))
        .collect();
    let board_widget = List::new(items)
        .block(block)
        .highlight_style(selection_style(state.focus));
    let mut list_state = ListState::default();
    list_state.select(state.board_index);
    frame.render_stateful_widget(board_widget, area, &mut list_state);
}

fn board_item(entry: &BoardEntry, width: usize) -> ListItem<'static> {
    let display_time = format_display_time(entry.created_at());
    if !entry.is_pending() {
        return ListItem::new(format_mood_line(&display_time, entry.text(), width));
    }

    let marker_width = SYNCING_LABEL.chars().count();
    let line = format_mood_line(&display_time, entry.text(), width.saturating_sub(marker_width));
    ListItem::new(Line::from(vec![
        Span::raw(line),
        Span::styled(SYNCING_LABEL, Style::default().fg(Color::Magenta)),
    ]))
}

fn input_title(state: &TuiState) -> String {
    let active_label = if matches!(state.focus, Focus::Input) {
        " [active]"
    } else {
        ""
    };
    let progress = if state.board.is_submitting() {
        " - Saving…"
    } else if state.board.can_submit(state.input.text()) {
        " - Enter to add"
    } else {
        ""
    };
    format!("Mood{active_label}{progress} (Ctrl+R refresh, Tab switch, Esc exit)")
}

fn board_title(state: &TuiState) -> String {
    if matches!(state.focus, Focus::Board) {
        "Mood Board [active] (r refresh, Tab switch, q quit)".to_string()
    } else {
        "Mood Board".to_string()
    }
}

fn focus_style(current: Focus, target: Focus) -> Style {
    if current == target {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

fn selection_style(focus: Focus) -> Style {
    match focus {
        Focus::Board => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Focus::Input => Style::default(),
    }
}

fn split_layout(area: Rect) -> [Rect; 2] {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    [areas[0], areas[1]]
}
