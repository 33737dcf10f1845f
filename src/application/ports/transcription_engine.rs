use async_trait::async_trait;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    /// Convert one audio artifact into text. `language` is the ISO 639-1
    /// hint supplied with the job; backends may ignore it.
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &str,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("artifact read failed: {0}")]
    ArtifactUnreadable(String),
}
