use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

use super::{build_router, AppState};
use crate::config::Settings;
use crate::utils::error::{AppError, Result};

pub struct ApiServer {
    router: Router,
    bind_address: String,
}

impl ApiServer {
    pub fn new(settings: &Settings, state: AppState) -> Result<Self> {
        let state = state.with_slow_request_threshold(settings.slow_request_threshold());
        let router = build_router(state, &settings.cors)?;

        Ok(Self {
            router,
            bind_address: settings.bind_address(),
        })
    }

    /// 綁定設定中的位址並執行到收到 Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(self.bind_address.as_str()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr()?;
        tracing::info!("🚀 Server running at http://{}", local_addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| AppError::ServerError {
                message: e.to_string(),
            })?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
