//! Client-side mood list with optimistic creates.

mod state;
mod worker;

pub(crate) use state::{BoardEntry, MoodBoard};
pub(crate) use worker::{BoardEvent, BoardWorker};
