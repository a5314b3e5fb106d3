use std::sync::Arc;

use crate::store::MoodStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<dyn MoodStore>,
}

impl AppState {
    pub(crate) fn new(store: Arc<dyn MoodStore>) -> Self {
        Self { store }
    }
}
