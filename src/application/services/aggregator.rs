use tokio::sync::mpsc;

use crate::domain::SegmentResult;

/// Fan-in stage: drains the dispatcher's result channel.
pub struct Aggregator;

impl Aggregator {
    /// Collects results until the channel closes.
    ///
    /// The dispatcher guarantees one result per segment, so a shortfall here
    /// means workers died mid-job; the gap is logged and the partial set is
    /// returned rather than hanging the request.
    pub async fn collect(
        results: &mut mpsc::Receiver<SegmentResult>,
        expected: usize,
    ) -> Vec<SegmentResult> {
        let mut collected = Vec::with_capacity(expected);
        while let Some(result) = results.recv().await {
            collected.push(result);
        }

        if collected.len() != expected {
            tracing::warn!(
                expected,
                received = collected.len(),
                "Aggregation finished with missing segment results"
            );
        }

        collected
    }
}
