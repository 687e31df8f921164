//! HTTP surface: router, CORS and the serve loop.

pub mod handlers;
pub mod router;

use std::sync::Arc;

use crate::adapters::NumbersApiClient;
use crate::core::service::ClassifyService;
use crate::domain::ports::{ConfigProvider, FactSource};
use crate::utils::error::Result;

pub use router::create_router;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClassifyService>,
}

impl AppState {
    pub fn new(facts: Arc<dyn FactSource>) -> Self {
        Self {
            service: Arc::new(ClassifyService::new(facts)),
        }
    }

    /// Wires the Numbers API adapter using the configured base URL and timeout.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = NumbersApiClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }
}

pub async fn serve<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(address.as_str()).await?;
    tracing::info!(address = %address, "🚀 Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
