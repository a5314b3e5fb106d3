use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::{error::AppError, state::AppState};
use crate::{domain::mood::MoodRecord, store::ValidationError};

const STATUS_MESSAGE: &str = "Mood Board API up and running";

#[derive(Serialize)]
pub(crate) struct StatusMessage {
    message: &'static str,
}

pub(crate) async fn status_handler() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: STATUS_MESSAGE,
    })
}

pub(crate) async fn list_moods_handler(State(state): State<AppState>) -> Json<Vec<MoodRecord>> {
    Json(state.store.list_moods())
}

pub(crate) async fn create_mood_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MoodRecord>), AppError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected mood payload: {}", rejection.body_text());
        AppError::MalformedPayload
    })?;

    let text = request_text(body).ok_or(ValidationError::TextRequired)?;
    let mood = state.store.create_mood(&text)?;
    info!("Stored mood {}", mood.id);

    Ok((StatusCode::CREATED, Json(mood)))
}

/// `text` of a JSON object body. Missing, null, non-string values and
/// non-object bodies all count as absent.
fn request_text(body: Value) -> Option<String> {
    match body {
        Value::Object(mut fields) => match fields.remove("text") {
            Some(Value::String(text)) => Some(text),
            _ => None,
        },
        _ => None,
    }
}
