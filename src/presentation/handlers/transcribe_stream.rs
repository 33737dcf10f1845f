use std::convert::Infallible;
use std::time::Duration;

use axum::{Extension, Json};
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};

use crate::application::ports::{AudioCodec, TranscriptionEngine};
use crate::infrastructure::observability::RequestId;
use crate::presentation::state::AppState;

use super::api_types::{ErrorResponse, SegmentRecord, TranscribeQuery, TranscriptionResponse};
use super::upload::read_audio_upload;

/// Streams per-segment records as they complete, then a closing record with
/// the same shape as the batch response.
#[tracing::instrument(skip_all)]
pub async fn transcribe_stream_handler<C, E>(
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
        "Received audio for streaming transcription"
    );

    let job = match state
        .transcription_service
        .transcribe_stream(upload.data, language)
        .await
    {
        Ok(job) => job,
        Err(e) => {
            tracing::error!(error = %e, "Transcription job failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Transcription failed".to_string(),
                }),
            )
                .into_response();
        }
    };

    let sse_stream = async_stream::stream! {
        let mut job = job;
        let mut collected = Vec::with_capacity(job.total_segments);

        while let Some(result) = job.results.recv().await {
            let record = SegmentRecord {
                segment_index: result.index,
                text: result.text.clone(),
            };
            let json = serde_json::to_string(&record).unwrap_or_default();
            yield Ok::<_, Infallible>(Event::default().data(json));
            collected.push(result);
        }

        let summary = job.summarize(collected);
        let closing = serde_json::to_string(&TranscriptionResponse::from(summary)).unwrap_or_default();
        yield Ok(Event::default().data(closing));
    };

    Sse::new(sse_stream)
        .keep_alive(
            KeepAlive::new()
                .interval(Duration::from_secs(15))
                .text("keep-alive"),
        )
        .into_response()
}
