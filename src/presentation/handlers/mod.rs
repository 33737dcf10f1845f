pub mod api_types;
mod health;
mod index;
mod transcribe;
mod transcribe_stream;
mod upload;

pub use health::health_handler;
pub use index::index_handler;
pub use transcribe::transcribe_handler;
pub use transcribe_stream::transcribe_stream_handler;
