use reqwest::{
    StatusCode,
    blocking::{Client, Response},
};
use serde::Deserialize;
use tracing::debug;

use super::{ClientError, MoodApi};
use crate::domain::mood::{MoodRecord, NewMood};

pub(crate) struct HttpMoodApi {
    client: Client,
    moods_url: String,
}

impl HttpMoodApi {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            moods_url: format!("{}/api/moods", base_url.trim_end_matches('/')),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl MoodApi for HttpMoodApi {
    fn list_moods(&self) -> Result<Vec<MoodRecord>, ClientError> {
        debug!("GET {}", self.moods_url);
        let response = self.client.get(&self.moods_url).send()?;
        let response = expect_status(response, StatusCode::OK)?;
        Ok(response.json()?)
    }

    fn create_mood(&self, text: &str) -> Result<MoodRecord, ClientError> {
        debug!("POST {} ({} bytes)", self.moods_url, text.len());
        let response = self
            .client
            .post(&self.moods_url)
            .json(&NewMood::new(text))
            .send()?;
        let response = expect_status(response, StatusCode::CREATED)?;
        Ok(response.json()?)
    }
}

fn expect_status(response: Response, expected: StatusCode) -> Result<Response, ClientError> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    if status.is_client_error() {
        if let Ok(body) = response.json::<ErrorBody>() {
            return Err(ClientError::Rejected {
                status,
                message: body.error,
            });
        }
    }
    Err(ClientError::UnexpectedStatus(status))
}
