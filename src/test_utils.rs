#[cfg(test)]
pub mod test_utils {
    use crate::backend::PredictionBackend;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::path::Path;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Stand-in for the model server.
    ///
    /// The `stock` field selects the behavior:
    /// - `FAIL`: application failure with status 200
    /// - `CRASH`: application failure with status 500
    /// - `HTML`: non-JSON error page
    /// - anything else: a three-day BUY prediction echoing the request
    async fn mock_predict(Json(body): Json<Value>) -> Response {
        let stock = body["stock"].as_str().unwrap_or_default().to_string();

        match stock.as_str() {
            "FAIL" => Json(json!({
                "success": false,
                "error": "Insufficient data for prediction"
            }))
            .into_response(),
            "CRASH" => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Error: model exploded"})),
            )
                .into_response(),
            "HTML" => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "<html><body>Internal Server Error</body></html>",
            )
                .into_response(),
            _ => Json(json!({
                "success": true,
                "dates": ["2024-01-01", "2024-01-02", "2024-01-03"],
                "historical_prices": [100.0, 102.0, 101.0],
                "current_price": 101.0,
                "predicted_price": 105.0,
                "price_change": 3.96,
                "decision": "BUY",
                "confidence": 87,
                "echo": body
            }))
            .into_response(),
        }
    }

    /// Starts the mock model server on an ephemeral port and returns its
    /// base URL.
    pub async fn spawn_mock_backend() -> String {
        let app = Router::new().route("/predict", post(mock_predict));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        format!("http://{}", addr)
    }

    /// A URL nothing listens on.
    pub async fn unreachable_backend_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let addr = listener.local_addr().expect("Probe listener has no address");
        drop(listener);
        format!("http://{}", addr)
    }

    /// Backend client that ignores any proxy configured in the environment.
    pub fn test_backend(base_url: &str) -> PredictionBackend {
        let http = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build test http client");
        PredictionBackend::from_client(http, base_url)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. The subscriber is installed globally
    /// once; later calls are no-ops.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Create axum app for testing, forwarding to `backend_url`
    pub fn setup_test_app(backend_url: &str, static_dir: Option<&Path>) -> Router {
        init_test_tracing();

        let state = AppState {
            backend: test_backend(backend_url),
        };
        create_router(state, static_dir)
    }

    #[test]
    fn test_tracing_stays_installed() {
        init_test_tracing();
        init_test_tracing();

        assert!(tracing::dispatcher::has_been_set());
    }
}
