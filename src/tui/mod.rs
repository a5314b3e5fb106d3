use anyhow::Result;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, sync::Arc, sync::mpsc::Receiver, time::Duration};
use tracing::info;

mod handler;
mod state;
mod view;

use crate::{
    board::{BoardEvent, BoardWorker},
    client::MoodApi,
};
use handler::handle_tui_key;
use state::TuiState;
use view::draw_tui;

const TUI_POLL_MS: u64 = 100;

pub(crate) fn run_tui(api: Arc<dyn MoodApi>) -> Result<()> {
    let (worker, events) = BoardWorker::new(api);
    let mut state = TuiState::new();
    state.board.begin_refresh();
    worker.refresh();

    let (mut terminal, keyboard_enhanced) = setup_terminal()?;
    info!("Board opened");
    let result = run_tui_loop(&mut terminal, &worker, &events, &mut state);
    restore_terminal(&mut terminal, keyboard_enhanced)?;
    info!("Board closed");
    result
}

fn setup_terminal() -> Result<(Terminal<CrosstermBackend<io::Stdout>>, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok((Terminal::new(backend)?, keyboard_enhanced))
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    keyboard_enhanced: bool,
) -> Result<()> {
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    worker: &BoardWorker,
    events: &Receiver<BoardEvent>,
    state: &mut TuiState,
) -> Result<()> {
    loop {
        drain_board_events(events, state);
        terminal.draw(|frame| draw_tui(frame, state))?;
        if !poll_event()? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if handle_tui_key(worker, state, key) {
                break;
            }
        }
    }
    Ok(())
}

fn drain_board_events(events: &Receiver<BoardEvent>, state: &mut TuiState) {
    let mut changed = false;
    while let Ok(event) = events.try_recv() {
        state.board.apply(event);
        changed = true;
    }
    if changed {
        state.clamp_selection();
    }
}

fn poll_event() -> Result<bool> {
    Ok(event::poll(Duration::from_millis(TUI_POLL_MS))?)
}
