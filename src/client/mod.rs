use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::mood::MoodRecord;

mod http;
#[cfg(test)]
mod stub;

pub(crate) use http::HttpMoodApi;
#[cfg(test)]
pub(crate) use stub::StubMoodApi;

#[derive(Error, Debug)]
pub(crate) enum ClientError {
    #[error("server rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("unexpected response status {0}")]
    UnexpectedStatus(StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Remote mood service as seen by the board and the one-shot commands.
pub(crate) trait MoodApi: Send + Sync {
    fn list_moods(&self) -> Result<Vec<MoodRecord>, ClientError>;

    fn create_mood(&self, text: &str) -> Result<MoodRecord, ClientError>;
}
