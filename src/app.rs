use std::sync::Arc;

use crate::{
    client::{HttpMoodApi, MoodApi},
    config::ClientConfig,
};

pub(crate) struct AppContext {
    config: ClientConfig,
    api: Arc<dyn MoodApi>,
}

impl AppContext {
    pub(crate) fn new(api_url: Option<String>) -> Self {
        let config = ClientConfig::load(api_url);
        let api = Arc::new(HttpMoodApi::new(&config.api_url));
        Self { config, api }
    }

    pub(crate) fn api(&self) -> Arc<dyn MoodApi> {
        Arc::clone(&self.api)
    }

    pub(crate) fn api_url(&self) -> &str {
        &self.config.api_url
    }
}
