use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// A stuck backend call would otherwise pin a worker for the rest of the job.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Whisper-compatible HTTP backend speaking the `/audio/transcriptions`
/// multipart protocol.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        )
    }

    fn request_form(
        &self,
        audio_data: &[u8],
        language: &str,
    ) -> Result<multipart::Form, TranscriptionError> {
        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name("segment.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        Ok(multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "text")
            .part("file", file_part))
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &str,
    ) -> Result<String, TranscriptionError> {
        let form = self.request_form(audio_data, language)?;

        tracing::debug!(
            model = %self.model,
            language,
            bytes = audio_data.len(),
            "Sending segment to transcription backend"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "backend returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::debug!(chars = transcript.len(), "Backend returned segment text");

        Ok(transcript.trim().to_string())
    }
}
