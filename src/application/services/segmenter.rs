use std::sync::Arc;

use crate::application::ports::{AudioCodec, DecodedAudio};
use crate::domain::{ScopedArtifact, Segment, SegmentWindow};

const MS_PER_SECOND: u64 = 1_000;

/// Computes the ordered plan of fixed-duration windows covering `[0, duration)`.
///
/// Produces `ceil(duration / chunk)` windows and never fewer than one: audio
/// whose duration rounds down to zero milliseconds still yields a single
/// empty window, so downstream stages always have segments to work with. The
/// final window is clamped to the audio's end and may be shorter than the
/// configured chunk length.
pub fn plan_windows(duration_secs: f64, chunk_seconds: u64) -> Vec<SegmentWindow> {
    let chunk_ms = chunk_seconds.max(1).saturating_mul(MS_PER_SECOND);
    let duration_ms = (duration_secs * MS_PER_SECOND as f64).round().max(0.0) as u64;
    let count = duration_ms.div_ceil(chunk_ms).max(1);

    (0..count)
        .map(|index| {
            let start_ms = index * chunk_ms;
            SegmentWindow {
                index: index as usize,
                start_ms,
                end_ms: (start_ms + chunk_ms).min(duration_ms),
            }
        })
        .collect()
}

/// Turns decoded audio into independent segment artifacts ready for dispatch.
pub struct Segmenter<C> {
    codec: Arc<C>,
}

impl<C> Clone for Segmenter<C> {
    fn clone(&self) -> Self {
        Self {
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<C> Segmenter<C>
where
    C: AudioCodec,
{
    pub fn new(codec: Arc<C>) -> Self {
        Self { codec }
    }

    /// Materializes one audio artifact per planned window.
    ///
    /// A window whose export fails is kept as an artifact-less segment and
    /// surfaces as a failed result at transcription time; it never aborts
    /// the job.
    pub fn materialize(&self, audio: &DecodedAudio, chunk_seconds: u64) -> Vec<Segment> {
        let windows = plan_windows(audio.duration_secs(), chunk_seconds);
        tracing::debug!(
            windows = windows.len(),
            chunk_seconds,
            "Planned segment windows"
        );

        windows
            .into_iter()
            .map(|window| match self.codec.export_slice(audio, &window) {
                Ok(path) => Segment::new(window, ScopedArtifact::new(path)),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        segment = window.index,
                        "Failed to materialize segment artifact"
                    );
                    Segment::without_artifact(window)
                }
            })
            .collect()
    }
}
