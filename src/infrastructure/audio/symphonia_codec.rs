use std::io::Cursor;
use std::path::{Path, PathBuf};

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioCodec, AudioCodecError, DecodedAudio};
use crate::domain::SegmentWindow;

pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Container-agnostic codec: decodes uploads into 16kHz mono PCM and exports
/// window slices as WAV artifacts in the system temp directory.
pub struct SymphoniaCodec;

impl SymphoniaCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SymphoniaCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioCodec for SymphoniaCodec {
    fn decode(&self, data: &[u8]) -> Result<DecodedAudio, AudioCodecError> {
        let samples = decode_to_pcm(data)?;
        Ok(DecodedAudio {
            samples,
            sample_rate: TARGET_SAMPLE_RATE,
        })
    }

    fn export_slice(
        &self,
        audio: &DecodedAudio,
        window: &SegmentWindow,
    ) -> Result<PathBuf, AudioCodecError> {
        let rate = audio.sample_rate as u64;
        let end = ((window.end_ms * rate / 1_000) as usize).min(audio.samples.len());
        let start = ((window.start_ms * rate / 1_000) as usize).min(end);
        let slice = &audio.samples[start..end];

        let temp = tempfile::Builder::new()
            .prefix("segment-")
            .suffix(".wav")
            .tempfile()
            .map_err(|e| AudioCodecError::ExportFailed(format!("temp file: {}", e)))?;
        let path = temp
            .into_temp_path()
            .keep()
            .map_err(|e| AudioCodecError::ExportFailed(format!("persist: {}", e)))?;

        if let Err(e) = write_wav(&path, audio.sample_rate, slice) {
            let _ = std::fs::remove_file(&path);
            return Err(AudioCodecError::ExportFailed(format!("wav encode: {}", e)));
        }

        tracing::debug!(
            segment = window.index,
            samples = slice.len(),
            path = %path.display(),
            "Exported segment artifact"
        );

        Ok(path)
    }
}

fn write_wav(path: &Path, sample_rate: u32, samples: &[f32]) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
    }
    writer.finalize()
}

struct AudioStream {
    reader: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    source_rate: u32,
    channels: usize,
}

fn open_stream(data: &[u8]) -> Result<AudioStream, AudioCodecError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let probed = symphonia::default::get_probe()
        .format(
            &Hint::new(),
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioCodecError::DecodingFailed(format!("probe: {}", e)))?;

    let reader = probed.format;
    let track = reader
        .default_track()
        .ok_or_else(|| AudioCodecError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| AudioCodecError::DecodingFailed("unknown sample rate".to_string()))?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AudioCodecError::DecodingFailed(format!("codec init: {}", e)))?;

    Ok(AudioStream {
        reader,
        decoder,
        track_id,
        source_rate,
        channels,
    })
}

fn decode_to_pcm(data: &[u8]) -> Result<Vec<f32>, AudioCodecError> {
    let AudioStream {
        mut reader,
        mut decoder,
        track_id,
        source_rate,
        channels,
    } = open_stream(data)?;

    let mut pcm: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match reader.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                return Err(AudioCodecError::DecodingFailed(format!("packet read: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(AudioCodecError::DecodingFailed(format!("decode: {}", e)));
            }
        };

        if decoded.frames() == 0 {
            continue;
        }

        let buf = sample_buf
            .get_or_insert_with(|| SampleBuffer::new(decoded.capacity() as u64, *decoded.spec()));
        buf.copy_interleaved_ref(decoded);
        downmix_into(&mut pcm, buf.samples(), channels);
    }

    if pcm.is_empty() {
        return Err(AudioCodecError::DecodingFailed(
            "no audio samples decoded".to_string(),
        ));
    }

    let pcm = if source_rate == TARGET_SAMPLE_RATE {
        pcm
    } else {
        resample(&pcm, source_rate)?
    };

    tracing::debug!(
        samples = pcm.len(),
        source_rate,
        "Audio decoded to 16kHz mono PCM"
    );

    Ok(pcm)
}

fn downmix_into(out: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    if channels <= 1 {
        out.extend_from_slice(interleaved);
        return;
    }
    out.extend(
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32),
    );
}

fn resample(samples: &[f32], from_rate: u32) -> Result<Vec<f32>, AudioCodecError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    const CHUNK: usize = 1024;

    let ratio = f64::from(TARGET_SAMPLE_RATE) / f64::from(from_rate);
    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, CHUNK, 1)
        .map_err(|e| AudioCodecError::DecodingFailed(format!("resampler init: {}", e)))?;

    let target_len = (samples.len() as f64 * ratio) as usize;
    let mut resampled = Vec::with_capacity(target_len + CHUNK);
    // The resampler wants fixed-size input; the tail chunk is zero-padded and
    // the surplus trimmed off afterwards.
    let mut input = vec![0.0f32; CHUNK];

    for chunk in samples.chunks(CHUNK) {
        input[..chunk.len()].copy_from_slice(chunk);
        input[chunk.len()..].fill(0.0);

        let mut frames = resampler
            .process(&[&input], None)
            .map_err(|e| AudioCodecError::DecodingFailed(format!("resample: {}", e)))?;
        if let Some(channel) = frames.pop() {
            resampled.extend(channel);
        }
    }

    resampled.truncate(target_len);
    Ok(resampled)
}
