mod artifact;
mod job;
mod segment;
mod segment_result;
mod transcript;

pub use artifact::ScopedArtifact;
pub use job::{AudioJob, JobId};
pub use segment::{Segment, SegmentWindow};
pub use segment_result::SegmentResult;
pub use transcript::Transcript;
