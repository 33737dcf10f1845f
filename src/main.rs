use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use quillon::application::services::TranscriptionService;
use quillon::infrastructure::audio::{OpenAiWhisperEngine, SymphoniaCodec};
use quillon::infrastructure::observability::{TracingConfig, init_tracing};
use quillon::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    let codec = Arc::new(SymphoniaCodec::new());
    let engine = Arc::new(OpenAiWhisperEngine::new(
        settings.engine.api_key.clone(),
        settings.engine.base_url.clone(),
        Some(settings.engine.model.clone()),
    ));

    let transcription_service = Arc::new(TranscriptionService::new(
        codec,
        engine,
        settings.pipeline.chunk_seconds,
        settings.pipeline.worker_count,
    ));

    tracing::info!(
        model = %settings.engine.model,
        chunk_seconds = settings.pipeline.chunk_seconds,
        workers = settings.pipeline.worker_count,
        "Transcription pipeline ready"
    );

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let state = AppState {
        transcription_service,
        settings,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
