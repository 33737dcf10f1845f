use std::str::FromStr;

/// Full runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub engine: EngineSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub device: String,
}

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub chunk_seconds: u64,
    pub worker_count: usize,
}

impl Settings {
    /// Reads every setting from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
                max_upload_mb: env_parsed("MAX_UPLOAD_MB", 512),
            },
            engine: EngineSettings {
                api_key: std::env::var("WHISPER_API_KEY").unwrap_or_default(),
                base_url: std::env::var("WHISPER_API_BASE_URL").ok(),
                model: env_or("WHISPER_MODEL", "whisper-1"),
                device: env_or("WHISPER_DEVICE", "cpu"),
            },
            pipeline: PipelineSettings {
                // Windows must have a positive length, so 0 is treated as unset.
                chunk_seconds: env_parsed("CHUNK_SEC", 120).max(1),
                worker_count: env_parsed("WORKER_COUNT", default_worker_count()).max(1),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// One worker per core, minus one core left for the runtime itself.
fn default_worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(1)
        .max(1)
}
