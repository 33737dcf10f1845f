use axum::{Extension, Json};
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{AudioCodec, TranscriptionEngine};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

use super::api_types::{ErrorResponse, TranscribeQuery, TranscriptionResponse};
use super::upload::read_audio_upload;

#[tracing::instrument(skip_all)]
pub async fn transcribe_handler<C, E>(
    State(state): State<AppState<C, E>>,
    Query(query): Query<TranscribeQuery>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: AudioCodec + 'static,
    E: TranscriptionEngine + 'static,
{
    let upload = match read_audio_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };
    let language = query.language();

    tracing::info!(
        request_id = %request_id.0,
        filename = %upload.filename,
        bytes = upload.data.len(),
        language = %language,
        "Received audio for transcription"
    );

    match state
        .transcription_service
        .transcribe_batch(upload.data, language)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(TranscriptionResponse::from(summary))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription job failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Transcription failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
