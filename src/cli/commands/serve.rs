use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, ServerConfig};
use crate::router::create_router;

pub async fn serve(config: ServerConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("StockCast host starting up");
    debug!("Configuration: {:?}", config);

    let config = config.validated();

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(&config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state, config.static_dir.as_deref());
    debug!("Router created successfully");

    // Start server
    let bind_address = config.bind_address;
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("StockCast running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    match &config.static_dir {
        Some(dir) => info!("Serving front-end from {}", dir.display()),
        None => info!("No front-end directory configured, serving API only"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
