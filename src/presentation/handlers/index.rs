use axum::response::{Html, IntoResponse};

const INDEX_PAGE: &str = r#"<html><body>
<h1>Audio Transcription Service</h1>
<p>POST an audio file to <code>/api/v1/transcribe</code>, or to
<code>/api/v1/transcribe/stream</code> for incremental results.
Health: <a href="/health">/health</a></p>
</body></html>
"#;

pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_PAGE)
}
