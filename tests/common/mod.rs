#![allow(dead_code)]

use roman_api::config::Settings;
use roman_api::utils::monitor::SystemMonitor;
use roman_api::{ApiServer, AppState, PrometheusMetrics};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestServer {
    pub addr: SocketAddr,
    pub metrics: PrometheusMetrics,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub async fn spawn_server() -> TestServer {
    let metrics = PrometheusMetrics::new().unwrap();
    let state = AppState::new(Arc::new(metrics.clone()), SystemMonitor::default());
    spawn_with_state(state, metrics).await
}

pub async fn spawn_with_state(state: AppState, metrics: PrometheusMetrics) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = ApiServer::new(&Settings::default(), state).unwrap();
    tokio::spawn(server.serve(listener, std::future::pending()));

    TestServer { addr, metrics }
}
