use axum::Json;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::api_types::ErrorResponse;

pub(super) struct AudioUpload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pulls the `file` part out of the multipart body.
pub(super) async fn read_audio_upload(multipart: &mut Multipart) -> Result<AudioUpload, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => {
                tracing::warn!("Transcription request without a file part");
                return Err(bad_request("No file uploaded"));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e),
                ));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return Err(error_response(
                    e.status(),
                    format!("Failed to read file: {}", e),
                ));
            }
        };

        if data.is_empty() {
            tracing::warn!(filename = %filename, "Uploaded file is empty");
            return Err(bad_request("Uploaded file is empty"));
        }

        return Ok(AudioUpload {
            filename,
            data: data.to_vec(),
        });
    }
}

fn bad_request(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message.to_string())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}
