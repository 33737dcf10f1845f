mod aggregator;
mod dispatcher;
mod segment_transcriber;
mod segmenter;
mod transcription_service;

pub use aggregator::Aggregator;
pub use dispatcher::Dispatcher;
pub use segment_transcriber::SegmentTranscriber;
pub use segmenter::{Segmenter, plan_windows};
pub use transcription_service::{
    JobSummary, StreamingJob, TranscriptionJobError, TranscriptionService,
};
