/// Outcome of one segment's transcription. Produced exactly once per segment,
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentResult {
    pub index: usize,
    pub text: String,
    pub failed: bool,
}

impl SegmentResult {
    pub fn ok(index: usize, text: String) -> Self {
        Self {
            index,
            text,
            failed: false,
        }
    }

    /// Placeholder for a segment whose backend call failed. The marker keeps
    /// the segment's line in the final transcript so the job completes with
    /// its structure intact instead of aborting.
    pub fn failed(index: usize) -> Self {
        Self {
            index,
            text: format!("[Error in chunk {}]", index),
            failed: true,
        }
    }
}
