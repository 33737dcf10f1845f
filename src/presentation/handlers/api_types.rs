use serde::{Deserialize, Serialize};

use crate::application::services::JobSummary;

/// Query parameters shared by the batch and streaming transcribe endpoints.
#[derive(Debug, Deserialize)]
pub struct TranscribeQuery {
    pub language: Option<String>,
}

impl TranscribeQuery {
    pub fn language(&self) -> String {
        self.language.clone().unwrap_or_else(|| "en".to_string())
    }
}

/// Completed-job record: the batch response body, and the closing record of
/// the SSE stream.
#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcript: String,
    pub audio_duration_sec: f64,
    pub processing_time_sec: f64,
    pub status_message: String,
}

impl From<JobSummary> for TranscriptionResponse {
    fn from(summary: JobSummary) -> Self {
        Self {
            transcript: summary.transcript.into_text(),
            audio_duration_sec: summary.audio_duration_sec,
            processing_time_sec: summary.processing_time_sec,
            status_message: "Transcription completed".to_string(),
        }
    }
}

/// Per-segment record on the SSE stream, emitted in completion order.
#[derive(Debug, Serialize)]
pub struct SegmentRecord {
    pub segment_index: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
