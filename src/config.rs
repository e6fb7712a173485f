use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use crate::backend::PredictionBackend;
use crate::schemas::AppState;

/// Resolved settings of the serving host
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_address: SocketAddr,
    /// Base URL of the model server (without `/predict`)
    pub backend_url: String,
    /// Directory with the compiled front-end, if it should be served
    pub static_dir: Option<PathBuf>,
    /// Upper bound for one model-server round trip
    pub backend_timeout: Duration,
}

impl ServerConfig {
    pub fn new(
        bind_address: SocketAddr,
        backend_url: String,
        static_dir: Option<PathBuf>,
        backend_timeout_secs: u64,
    ) -> Self {
        Self {
            bind_address,
            backend_url,
            static_dir,
            backend_timeout: Duration::from_secs(backend_timeout_secs),
        }
    }

    /// Drops a static directory that does not exist, so the host still
    /// starts (API only) when the front-end has not been built.
    pub fn validated(mut self) -> Self {
        if let Some(dir) = &self.static_dir {
            if !dir.is_dir() {
                warn!("Static directory {} does not exist, serving API only", dir.display());
                self.static_dir = None;
            }
        }
        self
    }
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: &ServerConfig) -> Result<AppState> {
    info!("Prediction backend: {}", config.backend_url);
    debug!("Backend timeout: {:?}", config.backend_timeout);

    let backend = PredictionBackend::new(&config.backend_url, config.backend_timeout)?;

    Ok(AppState { backend })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(static_dir: Option<PathBuf>) -> ServerConfig {
        ServerConfig::new(
            "127.0.0.1:3000".parse().unwrap(),
            "http://127.0.0.1:5000".to_string(),
            static_dir,
            300,
        )
    }

    #[test]
    fn test_validated_drops_missing_static_dir() {
        let missing = std::env::temp_dir().join("stockcast-no-such-dir-for-tests");
        assert!(config(Some(missing)).validated().static_dir.is_none());
    }

    #[test]
    fn test_validated_keeps_existing_static_dir() {
        let dir = std::env::temp_dir();
        let validated = config(Some(dir.clone())).validated();
        assert_eq!(validated.static_dir, Some(dir));
        assert_eq!(validated.backend_timeout, Duration::from_secs(300));
    }

    #[tokio::test]
    async fn test_initialize_app_state_trims_trailing_slash() {
        let mut config = config(None);
        config.backend_url = "http://127.0.0.1:5000/".to_string();

        let state = initialize_app_state(&config).unwrap();

        assert_eq!(state.backend.base_url(), "http://127.0.0.1:5000");
        assert_eq!(state.backend.predict_url(), "http://127.0.0.1:5000/predict");
    }
}
