//! HTTP boundary: router, handlers and the server runner.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::build_router;
pub use server::ApiServer;

use crate::core::converter::RomanEncoder;
use crate::core::service::ConversionService;
use crate::domain::ports::{NumeralEncoder, RequestMetrics};
use crate::utils::monitor::SystemMonitor;
use std::sync::Arc;
use std::time::Duration;

/// Shared state handed to every handler. Collaborators are injected here
/// rather than looked up globally.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ConversionService<Arc<dyn NumeralEncoder>>>,
    pub metrics: Arc<dyn RequestMetrics>,
    pub monitor: Arc<SystemMonitor>,
    pub slow_request_threshold: Duration,
}

impl AppState {
    pub fn new(metrics: Arc<dyn RequestMetrics>, monitor: SystemMonitor) -> Self {
        let encoder: Arc<dyn NumeralEncoder> = Arc::new(RomanEncoder);
        Self {
            service: Arc::new(ConversionService::with_encoder(encoder)),
            metrics,
            monitor: Arc::new(monitor),
            slow_request_threshold: Duration::from_millis(100),
        }
    }

    pub fn with_encoder(mut self, encoder: Arc<dyn NumeralEncoder>) -> Self {
        self.service = Arc::new(ConversionService::with_encoder(encoder));
        self
    }

    pub fn with_slow_request_threshold(mut self, threshold: Duration) -> Self {
        self.slow_request_threshold = threshold;
        self
    }
}
