use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{Segment, SegmentResult};

/// Runs a single segment through the transcription engine.
///
/// Every failure mode collapses into a placeholder result carrying the
/// segment's index, and the segment's artifact is released as soon as the
/// engine call returns. One bad segment degrades the transcript instead of
/// failing the job.
pub struct SegmentTranscriber<E> {
    engine: Arc<E>,
}

impl<E> SegmentTranscriber<E>
where
    E: TranscriptionEngine,
{
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    pub async fn transcribe(&self, mut segment: Segment, language: &str) -> SegmentResult {
        let index = segment.index();

        let Some(mut artifact) = segment.take_artifact() else {
            // Export already failed during segmentation.
            return SegmentResult::failed(index);
        };

        tracing::debug!(segment = index, language, "Transcribing segment");
        let outcome = self.run_engine(artifact.path(), language).await;
        artifact.remove();

        match outcome {
            Ok(text) => {
                tracing::debug!(segment = index, "Segment transcribed");
                SegmentResult::ok(index, text)
            }
            Err(e) => {
                tracing::error!(error = %e, segment = index, "Segment transcription failed");
                SegmentResult::failed(index)
            }
        }
    }

    async fn run_engine(&self, path: &Path, language: &str) -> Result<String, TranscriptionError> {
        let audio_data = tokio::fs::read(path)
            .await
            .map_err(|e| TranscriptionError::ArtifactUnreadable(e.to_string()))?;
        self.engine.transcribe(&audio_data, language).await
    }
}
