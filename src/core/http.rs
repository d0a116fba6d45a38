//! Dashboard HTTP server using Axum

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::AdvisorConfig;
use crate::core::analysis::{AnalysisError, AnalysisService};
use crate::metrics::Metrics;
use crate::models::params::{NotificationCredentials, NotificationSettings, UserParameters};
use crate::models::report::AnalysisReport;
use crate::services::binance::BinanceMarketDataProvider;
use crate::services::telegram::TelegramNotifier;

const DASHBOARD_HTML: &str = include_str!("assets/dashboard.html");

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub service: Arc<AnalysisService>,
    pub config: Arc<AdvisorConfig>,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "sellwise-dashboard"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Dashboard page with the parameter form, prefilled from configuration.
async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let params = &state.config.params;
    Html(
        DASHBOARD_HTML
            .replace("{{symbol}}", &html_escape(&params.symbol))
            .replace("{{cost_basis}}", &params.cost_basis.to_string())
            .replace("{{rsi_sell_threshold}}", &params.rsi_sell_threshold.to_string())
            .replace(
                "{{notify_checked}}",
                if state.config.notifications.enabled { "checked" } else { "" },
            ),
    )
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
    pub cost_basis: f64,
    #[serde(default)]
    pub rsi_sell_threshold: Option<u8>,
    #[serde(default)]
    pub notify: Option<bool>,
    #[serde(default)]
    pub bot_token: Option<String>,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl AnalyzeRequest {
    /// Split into parameters and notification settings; absent fields fall back to `config`.
    fn resolve(self, config: &AdvisorConfig) -> (UserParameters, NotificationSettings) {
        let params = UserParameters::new(
            self.symbol,
            self.cost_basis,
            self.rsi_sell_threshold
                .unwrap_or(config.params.rsi_sell_threshold),
        );
        let fallback = &config.notifications.credentials;
        let credentials = NotificationCredentials::new(
            self.bot_token
                .filter(|t| !t.trim().is_empty())
                .or_else(|| fallback.token.clone()),
            self.chat_id
                .filter(|c| !c.trim().is_empty())
                .or_else(|| fallback.chat_id.clone()),
        );
        let notifications = NotificationSettings {
            enabled: self.notify.unwrap_or(config.notifications.enabled),
            credentials,
        };
        (params, notifications)
    }
}

/// Run one analysis and return the full report.
async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, Response> {
    let Json(request) = payload.map_err(rejection_response)?;
    let (params, notifications) = request.resolve(&state.config);
    state
        .service
        .analyze(&params, &notifications)
        .await
        .map(Json)
        .map_err(error_response)
}

fn error_response(error: AnalysisError) -> Response {
    let status = match error {
        AnalysisError::Parameters(_) => StatusCode::BAD_REQUEST,
        AnalysisError::DataFetch(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

/// Malformed bodies get the same `{"error": ...}` shape as parameter errors.
fn rejection_response(rejection: JsonRejection) -> Response {
    let message = format!("Invalid parameters: {}", rejection.body_text());
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/analyze", post(analyze))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: AdvisorConfig) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let service = AnalysisService::new(
        Arc::new(BinanceMarketDataProvider::with_base_url(
            config.binance_base_url.clone(),
        )),
        Arc::new(TelegramNotifier::with_base_url(
            config.telegram_base_url.clone(),
        )),
    )
    .with_metrics(metrics.clone());

    let port = config.port;
    let state = AppState {
        metrics,
        start_time: Arc::new(Instant::now()),
        service: Arc::new(service),
        config: Arc::new(config),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "Dashboard listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
