use std::env;

/// Language code forwarded to the backend when the caller supplies none.
pub const DEFAULT_LANGUAGE: &str = "mn";
/// Voice-activity-detection flag forwarded when the caller supplies none.
pub const DEFAULT_VAD: &str = "true";
/// Backend address used when `BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Relay configuration, resolved once at startup and handed to the server.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub backend_url: String,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_env_value(env::var("BACKEND_URL").ok())
    }

    pub fn with_backend_url(backend_url: String) -> Self {
        Self { backend_url }
    }

    fn from_env_value(value: Option<String>) -> Self {
        Self {
            backend_url: value.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct ClientConfig {
    pub server_url: String,
    pub media_file: String,
    pub language: String,
    pub vad: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_defaults_when_env_absent() {
        let config = RelayConfig::from_env_value(None);
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn backend_url_taken_from_env_when_set() {
        let config = RelayConfig::from_env_value(Some("http://asr.internal:9000".to_string()));
        assert_eq!(config.backend_url, "http://asr.internal:9000");
    }
}
