use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioCodec, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, index_handler, transcribe_handler, transcribe_stream_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<C, E>(state: AppState<C, E>) -> Router
where
    C: AudioCodec + 'static,
    E: TranscriptionEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.server.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler::<C, E>))
        .route("/api/v1/transcribe", post(transcribe_handler::<C, E>))
        .route(
            "/api/v1/transcribe/stream",
            post(transcribe_stream_handler::<C, E>),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
