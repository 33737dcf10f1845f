use std::sync::Arc;

use crate::application::ports::{AudioCodec, TranscriptionEngine};
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<C, E>
where
    C: AudioCodec,
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<C, E>>,
    pub settings: Settings,
}

impl<C, E> Clone for AppState<C, E>
where
    C: AudioCodec,
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            settings: self.settings.clone(),
        }
    }
}
