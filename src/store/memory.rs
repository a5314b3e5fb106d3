use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use super::{MoodStore, ValidationError};
use crate::domain::mood::{MoodId, MoodRecord};

const SEED_TEXT: &str = "Feeling great!";

pub(crate) struct MemoryMoodStore {
    inner: Mutex<Inner>,
}

struct Inner {
    moods: Vec<MoodRecord>,
    next_id: MoodId,
}

impl MemoryMoodStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                moods: Vec::new(),
                next_id: MoodId::FIRST,
            }),
        }
    }

    /// Store holding the single welcome record a fresh server starts with.
    pub(crate) fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock();
            inner.append(SEED_TEXT.to_string());
        }
        store
    }
}

impl Inner {
    fn append(&mut self, text: String) -> MoodRecord {
        let mood = MoodRecord {
            id: self.next_id,
            text,
            created_at: Utc::now(),
        };
        self.next_id = self.next_id.next();
        self.moods.push(mood.clone());
        mood
    }
}

impl MoodStore for MemoryMoodStore {
    fn list_moods(&self) -> Vec<MoodRecord> {
        self.inner.lock().moods.clone()
    }

    fn create_mood(&self, text: &str) -> Result<MoodRecord, ValidationError> {
        if text.is_empty() {
            return Err(ValidationError::TextRequired);
        }
        let mood = self.inner.lock().append(text.to_string());
        debug!("created mood {} ({} bytes)", mood.id, mood.text.len());
        Ok(mood)
    }
}
