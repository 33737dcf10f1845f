use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::application::ports::TranscriptionEngine;
use crate::application::services::SegmentTranscriber;
use crate::domain::{Segment, SegmentResult};

/// Fan-out stage: feeds segments to a fixed-size pool of worker tasks.
///
/// At most `worker_count` engine calls are in flight at any moment. Segments
/// beyond that queue on the work channel and are picked up as workers free,
/// never dropped. Results arrive on the returned channel in completion
/// order; callers that need index order sort after collection.
pub struct Dispatcher<E> {
    transcriber: Arc<SegmentTranscriber<E>>,
    worker_count: usize,
}

impl<E> Dispatcher<E>
where
    E: TranscriptionEngine + 'static,
{
    pub fn new(engine: Arc<E>, worker_count: usize) -> Self {
        Self {
            transcriber: Arc::new(SegmentTranscriber::new(engine)),
            worker_count: worker_count.max(1),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Starts transcribing the given segments and returns the result channel.
    ///
    /// The channel yields exactly one result per segment and closes once the
    /// last worker finishes.
    pub fn dispatch(&self, segments: Vec<Segment>, language: String) -> mpsc::Receiver<SegmentResult> {
        let total = segments.len();
        let workers = self.worker_count.min(total).max(1);
        tracing::info!(segments = total, workers, "Dispatching segments to worker pool");

        let (work_tx, work_rx) = mpsc::unbounded_channel::<Segment>();
        let work_rx = Arc::new(Mutex::new(work_rx));
        let (result_tx, result_rx) = mpsc::channel::<SegmentResult>(total.max(1));

        for worker_id in 0..workers {
            let work_rx = Arc::clone(&work_rx);
            let result_tx = result_tx.clone();
            let transcriber = Arc::clone(&self.transcriber);
            let language = language.clone();

            tokio::spawn(async move {
                loop {
                    let segment = { work_rx.lock().await.recv().await };
                    let Some(segment) = segment else {
                        break;
                    };
                    let result = transcriber.transcribe(segment, &language).await;
                    if result_tx.send(result).await.is_err() {
                        // Consumer hung up; remaining segments release their
                        // artifacts when the work channel drops.
                        break;
                    }
                }
                tracing::debug!(worker_id, "Transcription worker finished");
            });
        }
        drop(result_tx);

        for segment in segments {
            // Workers hold the receiver, so enqueueing cannot fail here.
            let _ = work_tx.send(segment);
        }

        result_rx
    }
}
