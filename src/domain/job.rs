use uuid::Uuid;

use super::Segment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// One transcription request: the decoded duration, the chunk length it was
/// split with, the caller's language hint, and the materialized segments in
/// index order. Lives only for the lifetime of the request.
#[derive(Debug)]
pub struct AudioJob {
    pub id: JobId,
    pub duration_secs: f64,
    pub chunk_seconds: u64,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl AudioJob {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
