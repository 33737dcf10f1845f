use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use quillon::application::ports::{AudioCodec, AudioCodecError, DecodedAudio};
use quillon::application::services::{Segmenter, plan_windows};
use quillon::domain::SegmentWindow;

fn pcm(duration_secs: f64) -> DecodedAudio {
    DecodedAudio {
        samples: vec![0.0; (duration_secs * 16_000.0) as usize],
        sample_rate: 16_000,
    }
}

struct FileWritingCodec {
    dir: tempfile::TempDir,
}

impl FileWritingCodec {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }
}

impl AudioCodec for FileWritingCodec {
    fn decode(&self, _data: &[u8]) -> Result<DecodedAudio, AudioCodecError> {
        unreachable!("segmenter tests never decode")
    }

    fn export_slice(
        &self,
        _audio: &DecodedAudio,
        window: &SegmentWindow,
    ) -> Result<PathBuf, AudioCodecError> {
        let path = self.dir.path().join(format!("segment-{}.wav", window.index));
        std::fs::write(&path, window.index.to_string()).unwrap();
        Ok(path)
    }
}

struct FailingExportCodec {
    attempts: AtomicUsize,
}

impl AudioCodec for FailingExportCodec {
    fn decode(&self, _data: &[u8]) -> Result<DecodedAudio, AudioCodecError> {
        unreachable!("segmenter tests never decode")
    }

    fn export_slice(
        &self,
        _audio: &DecodedAudio,
        _window: &SegmentWindow,
    ) -> Result<PathBuf, AudioCodecError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AudioCodecError::ExportFailed("disk full".to_string()))
    }
}

#[test]
fn given_125s_audio_with_60s_chunks_when_planning_then_three_windows_cover_input() {
    let windows = plan_windows(125.0, 60);

    assert_eq!(windows.len(), 3);
    assert_eq!((windows[0].start_ms, windows[0].end_ms), (0, 60_000));
    assert_eq!((windows[1].start_ms, windows[1].end_ms), (60_000, 120_000));
    assert_eq!((windows[2].start_ms, windows[2].end_ms), (120_000, 125_000));
}

#[test]
fn given_subsecond_audio_when_planning_then_single_window_spans_it() {
    let windows = plan_windows(0.4, 60);

    assert_eq!(windows.len(), 1);
    assert_eq!((windows[0].start_ms, windows[0].end_ms), (0, 400));
}

#[test]
fn given_zero_duration_when_planning_then_one_empty_window_remains() {
    let windows = plan_windows(0.0, 60);

    assert_eq!(windows.len(), 1);
    assert_eq!((windows[0].start_ms, windows[0].end_ms), (0, 0));
}

#[test]
fn given_exact_multiple_duration_when_planning_then_no_trailing_empty_window() {
    let windows = plan_windows(120.0, 60);

    assert_eq!(windows.len(), 2);
    assert_eq!((windows[1].start_ms, windows[1].end_ms), (60_000, 120_000));
}

#[test]
fn given_enormous_chunk_length_when_planning_then_single_window_spans_audio() {
    let windows = plan_windows(125.0, u64::MAX);

    assert_eq!(windows.len(), 1);
    assert_eq!((windows[0].start_ms, windows[0].end_ms), (0, 125_000));
}

#[test]
fn given_varied_durations_when_planning_then_windows_are_contiguous_and_cover_input() {
    for (duration, chunk) in [
        (0.05, 1),
        (1.0, 1),
        (59.999, 60),
        (60.001, 60),
        (3600.5, 120),
        (7.3, 2),
    ] {
        let windows = plan_windows(duration, chunk);
        let duration_ms = (duration * 1000.0_f64).round() as u64;
        let expected = duration_ms.div_ceil(chunk * 1000).max(1);

        assert_eq!(
            windows.len() as u64,
            expected,
            "window count for {duration}s / {chunk}s chunks"
        );
        assert_eq!(windows[0].start_ms, 0);
        assert_eq!(windows.last().unwrap().end_ms, duration_ms);
        assert_eq!(windows.last().unwrap().index, windows.len() - 1);
        for (i, pair) in windows.windows(2).enumerate() {
            assert_eq!(pair[0].index, i);
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
            // Only the final window may be shorter than the chunk.
            assert_eq!(pair[0].duration_ms(), chunk * 1000);
        }
    }
}

#[test]
fn given_decoded_audio_when_materializing_then_every_window_gets_an_artifact() {
    let codec = Arc::new(FileWritingCodec::new());
    let segmenter = Segmenter::new(Arc::clone(&codec));

    let segments = segmenter.materialize(&pcm(125.0), 60);

    assert_eq!(segments.len(), 3);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.index(), i);
        assert!(segment.has_artifact());
    }
}

#[test]
fn given_single_window_audio_when_materializing_then_artifact_still_exported() {
    let codec = Arc::new(FileWritingCodec::new());
    let segmenter = Segmenter::new(Arc::clone(&codec));

    let segments = segmenter.materialize(&pcm(0.4), 60);

    assert_eq!(segments.len(), 1);
    assert!(segments[0].has_artifact());
}

#[test]
fn given_failing_exports_when_materializing_then_segments_kept_without_artifacts() {
    let codec = Arc::new(FailingExportCodec {
        attempts: AtomicUsize::new(0),
    });
    let segmenter = Segmenter::new(Arc::clone(&codec));

    let segments = segmenter.materialize(&pcm(125.0), 60);

    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| !s.has_artifact()));
    assert_eq!(codec.attempts.load(Ordering::SeqCst), 3);
}
