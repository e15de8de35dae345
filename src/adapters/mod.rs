// Adapters layer: concrete implementations for external systems (http server, metrics, http client)

pub mod client;
pub mod http;
pub mod metrics;
