//! Prometheus metrics for the dashboard server.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub analyses_total: IntCounter,
    pub analysis_failures_total: IntCounter,
    pub alerts_dispatched_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let analyses_total = IntCounter::new("analyses_total", "Completed analyses")?;
        let analysis_failures_total =
            IntCounter::new("analysis_failures_total", "Analyses aborted by an error")?;
        let alerts_dispatched_total =
            IntCounter::new("alerts_dispatched_total", "Alerts handed to the notification gateway")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(analysis_failures_total.clone()))?;
        registry.register(Box::new(alerts_dispatched_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            analyses_total,
            analysis_failures_total,
            alerts_dispatched_total,
        })
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
