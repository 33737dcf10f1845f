mod openai_whisper_engine;
mod symphonia_codec;

pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use symphonia_codec::{SymphoniaCodec, TARGET_SAMPLE_RATE};
