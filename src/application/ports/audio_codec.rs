use std::path::PathBuf;

use crate::domain::SegmentWindow;

/// Decoded PCM ready for slicing: mono samples at a fixed rate.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl DecodedAudio {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Container/codec collaborator. Implementations are synchronous and
/// CPU-bound; callers run them under `spawn_blocking`.
pub trait AudioCodec: Send + Sync {
    /// Decode an uploaded byte payload into mono PCM. Failure here is fatal
    /// to the whole job: without a duration there is nothing to segment.
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, AudioCodecError>;

    /// Write the window's slice of `audio` as an independent encoded artifact
    /// and return its path. The caller owns the file from that point on.
    fn export_slice(
        &self,
        audio: &DecodedAudio,
        window: &SegmentWindow,
    ) -> Result<PathBuf, AudioCodecError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioCodecError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("slice export failed: {0}")]
    ExportFailed(String),
}
