use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioCodec, TranscriptionEngine};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub device: String,
    pub model: String,
    pub chunk_sec: u64,
    pub workers: usize,
}

pub async fn health_handler<C, E>(State(state): State<AppState<C, E>>) -> impl IntoResponse
where
    C: AudioCodec + 'static,
    E: TranscriptionEngine + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            device: state.settings.engine.device.clone(),
            model: state.settings.engine.model.clone(),
            chunk_sec: state.transcription_service.chunk_seconds(),
            workers: state.transcription_service.worker_count(),
        }),
    )
}
