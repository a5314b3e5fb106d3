use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use tracing::debug;

use super::state::PendingSubmission;
use crate::{
    client::{ClientError, MoodApi},
    domain::mood::{MoodRecord, TempId},
};

/// Completion of a background request, applied to the board by the UI loop.
#[derive(Debug)]
pub(crate) enum BoardEvent {
    Refreshed(Result<Vec<MoodRecord>, ClientError>),
    Created {
        temp_id: TempId,
        result: Result<MoodRecord, ClientError>,
    },
}

/// Runs requests off the UI thread. Requests are never cancelled or retried.
pub(crate) struct BoardWorker {
    api: Arc<dyn MoodApi>,
    sender: Sender<BoardEvent>,
}

impl BoardWorker {
    pub(crate) fn new(api: Arc<dyn MoodApi>) -> (Self, Receiver<BoardEvent>) {
        let (sender, receiver) = mpsc::channel();
        (Self { api, sender }, receiver)
    }

    pub(crate) fn refresh(&self) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        thread::spawn(move || {
            let result = api.list_moods();
            let _ = sender.send(BoardEvent::Refreshed(result));
        });
    }

    pub(crate) fn create(&self, submission: PendingSubmission) {
        let api = Arc::clone(&self.api);
        let sender = self.sender.clone();
        debug!("submitting {}", submission.temp_id);
        thread::spawn(move || {
            let result = api.create_mood(&submission.text);
            let _ = sender.send(BoardEvent::Created {
                temp_id: submission.temp_id,
                result,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{board::MoodBoard, client::StubMoodApi};

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn refresh_reports_server_list() {
        let api = Arc::new(StubMoodApi::new());
        api.create_mood("hello").unwrap();
        let (worker, events) = BoardWorker::new(api);

        worker.refresh();

        match events.recv_timeout(WAIT).unwrap() {
            BoardEvent::Refreshed(Ok(moods)) => assert_eq!(moods.len(), 1),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn create_round_trip_confirms_pending_entry() {
        let api = Arc::new(StubMoodApi::new());
        let (worker, events) = BoardWorker::new(api.clone());
        let mut board = MoodBoard::new();

        let submission = board.begin_submit("sunny").unwrap();
        worker.create(submission);
        board.apply(events.recv_timeout(WAIT).unwrap());

        assert!(!board.is_submitting());
        assert_eq!(board.entries().len(), 1);
        assert!(!board.entries()[0].is_pending());
        assert_eq!(api.stored()[0].text, "sunny");
    }

    #[test]
    fn failed_create_discards_pending_entry() {
        let (worker, events) = BoardWorker::new(Arc::new(StubMoodApi::failing()));
        let mut board = MoodBoard::new();

        let submission = board.begin_submit("stormy").unwrap();
        worker.create(submission);
        board.apply(events.recv_timeout(WAIT).unwrap());

        assert!(board.entries().is_empty());
        assert!(!board.is_submitting());
    }
}
