use super::SegmentResult;

/// Join of all segment results ordered by segment index, one line per
/// segment. Results may arrive in any completion order; line `i` of the text
/// always belongs to segment `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
    segment_count: usize,
}

impl Transcript {
    pub fn from_results(mut results: Vec<SegmentResult>) -> Self {
        results.sort_by_key(|r| r.index);
        let segment_count = results.len();
        let text = results
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            text,
            segment_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
