use std::sync::Arc;

use anyhow::Result;
use crossterm::terminal;
use tracing::info;

use crate::{
    app::AppContext,
    cli::args::{Cli, Command},
    config::{self, ServerConfig},
    format, logging, server,
    store::MemoryMoodStore,
    tui,
};

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Serve { port }) => serve(port),
        Some(Command::Version) => {
            println!("mood {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::List) => {
            logging::init_stderr();
            list_moods(&AppContext::new(cli.api_url))
        }
        Some(Command::Add { text }) => {
            logging::init_stderr();
            add_mood(&AppContext::new(cli.api_url), &text)
        }
        None => match cli.text {
            Some(text) => {
                logging::init_stderr();
                add_mood(&AppContext::new(cli.api_url), &text)
            }
            None => {
                logging::init_file(&config::log_path()?)?;
                tui::run_tui(AppContext::new(cli.api_url).api())
            }
        },
    }
}

fn serve(port: Option<u16>) -> Result<()> {
    logging::init_stdout();
    let config = ServerConfig::load(port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(&config, Arc::new(MemoryMoodStore::seeded())))
}

fn add_mood(app: &AppContext, text: &str) -> Result<()> {
    let mood = app.api().create_mood(text)?;
    info!("Added mood {} via {}", mood.id, app.api_url());
    println!("Added mood {}", mood.id);
    Ok(())
}

fn list_moods(app: &AppContext) -> Result<()> {
    let moods = app.api().list_moods()?;
    let terminal_width = terminal::size()
        .map(|(width, _)| width as usize)
        .unwrap_or(80);
    for mood in moods.iter().rev() {
        let display_time = format::format_display_time(mood.created_at);
        let line = format::format_mood_line(&display_time, &mood.text, terminal_width);
        println!("{}", line);
    }

    Ok(())
}
