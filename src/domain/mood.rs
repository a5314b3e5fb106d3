use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned identifier. Strictly increasing within one server process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct MoodId(u64);

impl MoodId {
    pub(crate) const FIRST: MoodId = MoodId(1);

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for MoodId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoodRecord {
    pub(crate) id: MoodId,
    pub(crate) text: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct NewMood<'a> {
    pub(crate) text: &'a str,
}

impl<'a> NewMood<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Client-local key for a mood the server has not confirmed yet.
///
/// Lives in its own type so it can never be confused with a [`MoodId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TempId(Uuid);

impl TempId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "temp-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingMood {
    pub(crate) temp_id: TempId,
    pub(crate) text: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl PendingMood {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self {
            temp_id: TempId::new(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
