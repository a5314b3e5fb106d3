use anyhow::Result;
use clap::Parser;

mod app;
mod board;
mod cli;
mod client;
mod config;
mod domain;
mod format;
mod logging;
mod server;
mod store;
mod tui;

use cli::{args::Cli, commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::dispatch(cli)
}
