use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::worker::BoardEvent;
use crate::{
    client::ClientError,
    domain::mood::{MoodRecord, PendingMood, TempId},
};

/// One row of the board, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BoardEntry {
    Confirmed(MoodRecord),
    Pending(PendingMood),
}

impl BoardEntry {
    pub(crate) fn text(&self) -> &str {
        match self {
            BoardEntry::Confirmed(mood) => &mood.text,
            BoardEntry::Pending(pending) => &pending.text,
        }
    }

    pub(crate) fn created_at(&self) -> DateTime<Utc> {
        match self {
            BoardEntry::Confirmed(mood) => mood.created_at,
            BoardEntry::Pending(pending) => pending.created_at,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, BoardEntry::Pending(_))
    }

    fn has_temp_id(&self, temp_id: TempId) -> bool {
        matches!(self, BoardEntry::Pending(pending) if pending.temp_id == temp_id)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListState {
    Idle,
    Loading,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SubmissionState {
    Idle,
    Submitting,
}

/// A create request that has been rendered optimistically and still has to
/// be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingSubmission {
    pub(crate) temp_id: TempId,
    pub(crate) text: String,
}

/// Locally known moods plus list and submission progress.
///
/// Refresh and submission are tracked independently. A refresh that lands
/// while a submission is in flight replaces the list wholesale and drops the
/// pending entry; the later create response then finds nothing to replace.
pub(crate) struct MoodBoard {
    entries: Vec<BoardEntry>,
    list: ListState,
    submission: SubmissionState,
}

impl MoodBoard {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            list: ListState::Idle,
            submission: SubmissionState::Idle,
        }
    }

    pub(crate) fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.list == ListState::Loading
    }

    pub(crate) fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// Whether `text` would be accepted by [`MoodBoard::begin_submit`].
    pub(crate) fn can_submit(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.is_submitting()
    }

    pub(crate) fn begin_refresh(&mut self) {
        self.list = ListState::Loading;
    }

    pub(crate) fn finish_refresh(&mut self, result: Result<Vec<MoodRecord>, ClientError>) {
        match result {
            Ok(moods) => {
                debug!("refreshed board with {} moods", moods.len());
                self.entries = moods.into_iter().rev().map(BoardEntry::Confirmed).collect();
            }
            Err(err) => warn!("Failed to fetch moods: {err}"),
        }
        self.list = ListState::Idle;
    }

    /// Renders `text` as a pending entry and enters `Submitting`.
    ///
    /// Returns `None` without touching state when the trimmed text is empty
    /// or another submission is still in flight. The untrimmed text is what
    /// gets sent.
    pub(crate) fn begin_submit(&mut self, text: &str) -> Option<PendingSubmission> {
        if !self.can_submit(text) {
            return None;
        }
        let pending = PendingMood::new(text);
        let submission = PendingSubmission {
            temp_id: pending.temp_id,
            text: pending.text.clone(),
        };
        self.entries.insert(0, BoardEntry::Pending(pending));
        self.submission = SubmissionState::Submitting;
        Some(submission)
    }

    pub(crate) fn finish_submit(
        &mut self,
        temp_id: TempId,
        result: Result<MoodRecord, ClientError>,
    ) {
        match result {
            Ok(mood) => match self.entries.iter_mut().find(|entry| entry.has_temp_id(temp_id)) {
                Some(entry) => *entry = BoardEntry::Confirmed(mood),
                None => debug!("{temp_id} confirmed as mood {} after leaving the board", mood.id),
            },
            Err(err) => {
                warn!("Failed to create mood: {err}");
                self.entries.retain(|entry| !entry.has_temp_id(temp_id));
            }
        }
        self.submission = SubmissionState::Idle;
    }

    pub(crate) fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::Refreshed(result) => self.finish_refresh(result),
            BoardEvent::Created { temp_id, result } => self.finish_submit(temp_id, result),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::domain::mood::MoodId;

    fn record(id: u64, text: &str) -> MoodRecord {
        MoodRecord {
            id: MoodId::from(id),
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }

    fn rejected() -> ClientError {
        ClientError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "text is required".to_string(),
        }
    }

    fn texts(board: &MoodBoard) -> Vec<&str> {
        board.entries().iter().map(BoardEntry::text).collect()
    }

    #[test]
    fn refresh_replaces_list_newest_first() {
        let mut board = MoodBoard::new();
        board.begin_refresh();
        assert!(board.is_loading());

        board.finish_refresh(Ok(vec![record(1, "old"), record(2, "new")]));

        assert!(!board.is_loading());
        assert_eq!(texts(&board), vec!["new", "old"]);
    }

    #[test]
    fn failed_refresh_keeps_list() {
        let mut board = MoodBoard::new();
        board.finish_refresh(Ok(vec![record(1, "kept")]));

        board.begin_refresh();
        board.finish_refresh(Err(ClientError::UnexpectedStatus(StatusCode::BAD_GATEWAY)));

        assert!(!board.is_loading());
        assert_eq!(texts(&board), vec!["kept"]);
    }

    #[test]
    fn submit_prepends_pending_entry() {
        let mut board = MoodBoard::new();
        board.finish_refresh(Ok(vec![record(1, "first")]));

        let submission = board.begin_submit("excited").unwrap();

        assert!(board.is_submitting());
        assert_eq!(submission.text, "excited");
        assert_eq!(texts(&board), vec!["excited", "first"]);
        assert!(board.entries()[0].is_pending());
    }

    #[test]
    fn blank_text_is_not_submitted() {
        let mut board = MoodBoard::new();

        assert_eq!(board.begin_submit(""), None);
        assert_eq!(board.begin_submit("  \n\t"), None);
        assert!(!board.is_submitting());
        assert!(board.entries().is_empty());
    }

    #[test]
    fn untrimmed_text_is_sent() {
        let mut board = MoodBoard::new();
        let submission = board.begin_submit("  calm  ").unwrap();
        assert_eq!(submission.text, "  calm  ");
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut board = MoodBoard::new();
        let excited = board.begin_submit("excited").unwrap();

        assert_eq!(board.begin_submit("calm"), None);
        assert_eq!(texts(&board), vec!["excited"]);

        board.finish_submit(excited.temp_id, Ok(record(2, "excited")));
        assert!(!board.is_submitting());

        assert!(board.begin_submit("calm").is_some());
        assert_eq!(texts(&board), vec!["calm", "excited"]);
    }

    #[test]
    fn success_replaces_pending_entry_in_place() {
        let mut board = MoodBoard::new();
        board.finish_refresh(Ok(vec![record(1, "first")]));
        let submission = board.begin_submit("joyful").unwrap();

        let confirmed = record(2, "joyful");
        board.finish_submit(submission.temp_id, Ok(confirmed.clone()));

        assert_eq!(board.entries()[0], BoardEntry::Confirmed(confirmed));
        assert_eq!(board.entries().len(), 2);
        assert!(board.entries().iter().all(|entry| !entry.is_pending()));
    }

    #[test]
    fn failure_removes_pending_entry() {
        let mut board = MoodBoard::new();
        board.finish_refresh(Ok(vec![record(1, "first")]));
        let submission = board.begin_submit("grumpy").unwrap();

        board.finish_submit(submission.temp_id, Err(rejected()));

        assert!(!board.is_submitting());
        assert_eq!(texts(&board), vec!["first"]);
    }

    #[test]
    fn refresh_during_submission_drops_pending_entry() {
        let mut board = MoodBoard::new();
        let submission = board.begin_submit("racing").unwrap();

        board.begin_refresh();
        board.finish_refresh(Ok(vec![record(1, "server")]));
        assert_eq!(texts(&board), vec!["server"]);
        assert!(board.is_submitting());

        board.finish_submit(submission.temp_id, Ok(record(2, "racing")));
        assert_eq!(texts(&board), vec!["server"]);
        assert!(!board.is_submitting());
    }

    #[test]
    fn events_route_to_matching_transition() {
        let mut board = MoodBoard::new();
        board.begin_refresh();
        board.apply(BoardEvent::Refreshed(Ok(vec![record(1, "a")])));
        assert!(!board.is_loading());

        let submission = board.begin_submit("b").unwrap();
        board.apply(BoardEvent::Created {
            temp_id: submission.temp_id,
            result: Err(rejected()),
        });
        assert_eq!(texts(&board), vec!["a"]);
    }
}
