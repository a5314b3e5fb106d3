use chrono::Utc;
use parking_lot::Mutex;
use reqwest::StatusCode;

use super::{ClientError, MoodApi};
use crate::domain::mood::{MoodId, MoodRecord};

/// In-process stand-in for the mood service.
pub(crate) struct StubMoodApi {
    moods: Mutex<Vec<MoodRecord>>,
    failing: bool,
}

impl StubMoodApi {
    pub(crate) fn new() -> Self {
        Self {
            moods: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// Every request answers with a 500.
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub(crate) fn stored(&self) -> Vec<MoodRecord> {
        self.moods.lock().clone()
    }
}

impl MoodApi for StubMoodApi {
    fn list_moods(&self) -> Result<Vec<MoodRecord>, ClientError> {
        if self.failing {
            return Err(ClientError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self.stored())
    }

    fn create_mood(&self, text: &str) -> Result<MoodRecord, ClientError> {
        if self.failing {
            return Err(ClientError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR));
        }
        let mut moods = self.moods.lock();
        let mood = MoodRecord {
            id: MoodId::from(moods.len() as u64 + 1),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        moods.push(mood.clone());
        Ok(mood)
    }
}
