use thiserror::Error;

use crate::domain::mood::MoodRecord;

mod memory;

pub(crate) use memory::MemoryMoodStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("text is required")]
    TextRequired,
}

/// Authoritative holder of mood records.
///
/// Implementations must make id assignment and append one atomic step.
pub(crate) trait MoodStore: Send + Sync {
    /// All records in creation order.
    fn list_moods(&self) -> Vec<MoodRecord>;

    /// Appends a record for `text`, rejecting empty text.
    ///
    /// Whitespace-only text is accepted.
    fn create_mood(&self, text: &str) -> Result<MoodRecord, ValidationError>;
}
