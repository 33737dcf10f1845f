mod audio_codec;
mod transcription_engine;

pub use audio_codec::{AudioCodec, AudioCodecError, DecodedAudio};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
