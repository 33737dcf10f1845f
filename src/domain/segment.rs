use super::ScopedArtifact;

/// One time-bounded slice of the input audio, bounds in milliseconds.
///
/// Indices are 0-based, contiguous, assigned in ascending temporal order and
/// never reused; consecutive windows share a boundary, so the plan covers the
/// whole input with no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentWindow {
    pub index: usize,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl SegmentWindow {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// A window together with the audio artifact materialized for it.
///
/// The segment owns its artifact exclusively until the backend adapter takes
/// and releases it. A segment carrying no artifact records a slicing failure;
/// it is surfaced as a failed result at dispatch time rather than aborting
/// segmentation.
#[derive(Debug)]
pub struct Segment {
    pub window: SegmentWindow,
    artifact: Option<ScopedArtifact>,
}

impl Segment {
    pub fn new(window: SegmentWindow, artifact: ScopedArtifact) -> Self {
        Self {
            window,
            artifact: Some(artifact),
        }
    }

    pub fn without_artifact(window: SegmentWindow) -> Self {
        Self {
            window,
            artifact: None,
        }
    }

    pub fn index(&self) -> usize {
        self.window.index
    }

    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn take_artifact(&mut self) -> Option<ScopedArtifact> {
        self.artifact.take()
    }
}
