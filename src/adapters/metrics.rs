use crate::domain::ports::RequestMetrics;
use crate::utils::error::{AppError, Result};
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::Arc;
use std::time::Duration;

const RESPONSE_TIME_BUCKETS: [f64; 7] = [0.1, 0.3, 0.5, 1.0, 1.5, 2.0, 5.0];
const REQUEST_LABELS: [&str; 3] = ["method", "route", "statusCode"];

/// 每個請求的 (method, route, statusCode) 計數與回應時間
#[derive(Clone)]
pub struct PrometheusMetrics {
    registry: Registry,
    requests: CounterVec,
    response_time: HistogramVec,
}

impl PrometheusMetrics {
    pub fn new() -> Result<Self> {
        Self::register(Registry::new())
    }

    pub fn register(registry: Registry) -> Result<Self> {
        let requests = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &REQUEST_LABELS,
        )?;
        registry.register(Box::new(requests.clone()))?;

        let response_time = HistogramVec::new(
            HistogramOpts::new("http_response_time_seconds", "Response time in seconds")
                .buckets(RESPONSE_TIME_BUCKETS.to_vec()),
            &REQUEST_LABELS,
        )?;
        registry.register(Box::new(response_time.clone()))?;

        Ok(Self {
            registry,
            requests,
            response_time,
        })
    }

    pub fn into_shared(self) -> Arc<dyn RequestMetrics> {
        Arc::new(self)
    }

    pub fn request_count(&self, method: &str, route: &str, status: u16) -> f64 {
        let status = status.to_string();
        self.requests
            .get_metric_with_label_values(&[method, route, status.as_str()][..])
            .map(|counter| counter.get())
            .unwrap_or_default()
    }
}

impl RequestMetrics for PrometheusMetrics {
    fn observe_request(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];

        if let Ok(counter) = self.requests.get_metric_with_label_values(&labels[..]) {
            counter.inc();
        }
        if let Ok(histogram) = self.response_time.get_metric_with_label_values(&labels[..]) {
            histogram.observe(elapsed.as_secs_f64());
        }
    }

    fn export(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| AppError::ServerError {
            message: format!("metrics output is not UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_request_labels() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.observe_request("GET", "/romannumeral", 200, Duration::from_millis(3));
        metrics.observe_request("GET", "/romannumeral", 200, Duration::from_millis(4));
        metrics.observe_request("GET", "/romannumeral", 400, Duration::from_millis(1));

        assert_eq!(metrics.request_count("GET", "/romannumeral", 200), 2.0);
        assert_eq!(metrics.request_count("GET", "/romannumeral", 400), 1.0);
        assert_eq!(metrics.request_count("GET", "/health", 200), 0.0);
    }

    #[test]
    fn test_export_text_format() {
        let metrics = PrometheusMetrics::new().unwrap();
        metrics.observe_request("GET", "/romannumeral", 200, Duration::from_millis(3));

        let text = metrics.export().unwrap();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("http_response_time_seconds_bucket"));
        assert!(text.contains("route=\"/romannumeral\""));
        assert!(text.contains("statusCode=\"200\""));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let registry = Registry::new();
        assert!(PrometheusMetrics::register(registry.clone()).is_ok());
        assert!(matches!(
            PrometheusMetrics::register(registry),
            Err(AppError::MetricsError(_))
        ));
    }
}
