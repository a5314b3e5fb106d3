use std::{fs::OpenOptions, io, path::Path, sync::Mutex};

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Server logs go to stdout.
pub(crate) fn init_stdout() {
    fmt().with_env_filter(env_filter()).init();
}

/// One-shot commands keep stdout for their output.
pub(crate) fn init_stderr() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// The board owns the terminal, so its log goes to a file.
pub(crate) fn init_file(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
