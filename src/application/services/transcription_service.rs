use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::application::ports::{AudioCodec, AudioCodecError, TranscriptionEngine};
use crate::application::services::{Aggregator, Dispatcher, Segmenter};
use crate::domain::{AudioJob, JobId, SegmentResult, Transcript};

#[derive(Debug, Error)]
pub enum TranscriptionJobError {
    #[error("audio decoding failed: {0}")]
    Decode(#[from] AudioCodecError),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result of a completed job, shared by batch and streaming modes.
pub struct JobSummary {
    pub transcript: Transcript,
    pub audio_duration_sec: f64,
    pub processing_time_sec: f64,
}

/// A job whose segment results are still arriving.
///
/// `results` yields one result per segment in completion order and closes
/// when the last worker finishes. `summarize` then assembles the same
/// summary a batch run would have produced.
pub struct StreamingJob {
    pub job_id: JobId,
    pub total_segments: usize,
    pub results: mpsc::Receiver<SegmentResult>,
    audio_duration_sec: f64,
    started: Instant,
}

impl StreamingJob {
    pub fn summarize(&self, collected: Vec<SegmentResult>) -> JobSummary {
        let transcript = Transcript::from_results(collected);
        let processing_time_sec = self.started.elapsed().as_secs_f64();
        tracing::info!(
            job_id = %self.job_id.as_uuid(),
            segments = self.total_segments,
            processing_time_sec,
            "Transcription job completed"
        );

        JobSummary {
            transcript,
            audio_duration_sec: round2(self.audio_duration_sec),
            processing_time_sec: round2(processing_time_sec),
        }
    }
}

/// Orchestrates the full pipeline: decode, segment, dispatch, aggregate.
pub struct TranscriptionService<C, E> {
    codec: Arc<C>,
    segmenter: Segmenter<C>,
    dispatcher: Dispatcher<E>,
    chunk_seconds: u64,
}

impl<C, E> TranscriptionService<C, E>
where
    C: AudioCodec + 'static,
    E: TranscriptionEngine + 'static,
{
    pub fn new(codec: Arc<C>, engine: Arc<E>, chunk_seconds: u64, worker_count: usize) -> Self {
        Self {
            segmenter: Segmenter::new(Arc::clone(&codec)),
            codec,
            dispatcher: Dispatcher::new(engine, worker_count),
            chunk_seconds,
        }
    }

    pub fn chunk_seconds(&self) -> u64 {
        self.chunk_seconds
    }

    pub fn worker_count(&self) -> usize {
        self.dispatcher.worker_count()
    }

    /// Runs a job to completion and returns the assembled transcript.
    pub async fn transcribe_batch(
        &self,
        audio_data: Vec<u8>,
        language: String,
    ) -> Result<JobSummary, TranscriptionJobError> {
        let mut job = self.transcribe_stream(audio_data, language).await?;
        let expected = job.total_segments;
        let results = Aggregator::collect(&mut job.results, expected).await;
        Ok(job.summarize(results))
    }

    /// Starts a job and hands back its live result channel.
    pub async fn transcribe_stream(
        &self,
        audio_data: Vec<u8>,
        language: String,
    ) -> Result<StreamingJob, TranscriptionJobError> {
        let started = Instant::now();
        let job = self.prepare(audio_data, language).await?;
        let job_id = job.id;
        let audio_duration_sec = job.duration_secs;
        let total_segments = job.segment_count();

        let results = self.dispatcher.dispatch(job.segments, job.language);

        Ok(StreamingJob {
            job_id,
            total_segments,
            results,
            audio_duration_sec,
            started,
        })
    }

    /// Decodes the upload and materializes segment artifacts on the blocking
    /// pool, since both steps are CPU-bound.
    async fn prepare(
        &self,
        audio_data: Vec<u8>,
        language: String,
    ) -> Result<AudioJob, TranscriptionJobError> {
        let codec = Arc::clone(&self.codec);
        let segmenter = self.segmenter.clone();
        let chunk_seconds = self.chunk_seconds;

        tokio::task::spawn_blocking(move || {
            let audio = codec.decode(&audio_data)?;
            let duration_secs = audio.duration_secs();
            let segments = segmenter.materialize(&audio, chunk_seconds);
            let id = JobId::new();
            tracing::info!(
                job_id = %id.as_uuid(),
                duration_secs,
                segments = segments.len(),
                "Audio decoded and segmented"
            );

            Ok(AudioJob {
                id,
                duration_secs,
                chunk_seconds,
                language,
                segments,
            })
        })
        .await
        .map_err(|e| TranscriptionJobError::Internal(format!("segmentation task failed: {e}")))?
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
