//! The "Analyze Now" pipeline.
//!
//! fetch candles -> RSI -> verdict -> report, then a best-effort alert.
//! A fetch failure aborts the invocation before anything is rendered.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::indicators::momentum::calculate_rsi_default;
use crate::metrics::Metrics;
use crate::models::params::{NotificationSettings, ParameterError, UserParameters};
use crate::models::report::AnalysisReport;
use crate::render::{metrics_view, verdict_lines, CandleChart};
use crate::services::market_data::{
    MarketDataError, MarketDataProvider, Timeframe, DEFAULT_CANDLE_LIMIT,
};
use crate::services::telegram::NotificationGateway;
use crate::signals::{compose_alert, should_alert, VerdictEngine, VerdictInput};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ParameterError),
    #[error("Error: {0}. Check your symbol name.")]
    DataFetch(#[from] MarketDataError),
}

/// Collaborators for an analysis run.
pub struct AnalysisService {
    data_provider: Arc<dyn MarketDataProvider>,
    notifier: Arc<dyn NotificationGateway>,
    metrics: Option<Arc<Metrics>>,
}

impl AnalysisService {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider>,
        notifier: Arc<dyn NotificationGateway>,
    ) -> Self {
        Self {
            data_provider,
            notifier,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub async fn analyze(
        &self,
        params: &UserParameters,
        notifications: &NotificationSettings,
    ) -> Result<AnalysisReport, AnalysisError> {
        let result = self.run(params, notifications).await;
        if let Some(metrics) = &self.metrics {
            match &result {
                Ok(report) => {
                    metrics.analyses_total.inc();
                    if report.alert_dispatched {
                        metrics.alerts_dispatched_total.inc();
                    }
                }
                Err(_) => metrics.analysis_failures_total.inc(),
            }
        }
        if let Err(e) = &result {
            warn!(symbol = %params.symbol, error = %e, "analysis aborted");
        }
        result
    }

    async fn run(
        &self,
        params: &UserParameters,
        notifications: &NotificationSettings,
    ) -> Result<AnalysisReport, AnalysisError> {
        params.validate()?;

        let candles = self
            .data_provider
            .get_candles(&params.symbol, Timeframe::OneHour, DEFAULT_CANDLE_LIMIT)
            .await?;
        let latest = candles.last().ok_or_else(|| MarketDataError::Empty {
            symbol: params.symbol.clone(),
        })?;

        let rsi = calculate_rsi_default(&candles).map(|rsi| rsi.value);
        let verdict = VerdictEngine::evaluate(&VerdictInput::new(latest.close, rsi, params));

        info!(
            symbol = %params.symbol,
            price = verdict.price,
            rsi = ?verdict.rsi,
            profit_pct = verdict.profit_pct,
            classification = %verdict.classification,
            take_profit = verdict.take_profit,
            "analysis complete"
        );

        let alert_dispatched = if notifications.enabled && should_alert(&verdict) {
            let message = compose_alert(&params.symbol, &verdict);
            self.dispatch_alert(&params.symbol, &message, notifications).await
        } else {
            false
        };

        let chart_svg = CandleChart::new(&params.symbol, &candles, params.cost_basis).render();
        Ok(AnalysisReport {
            symbol: params.symbol.clone(),
            metrics: metrics_view(&verdict),
            verdict_lines: verdict_lines(&verdict),
            verdict,
            candles,
            chart_svg,
            alert_dispatched,
        })
    }

    /// Fire-and-forget delivery. Failures are logged, never propagated.
    /// Returns whether the message was handed to the gateway.
    async fn dispatch_alert(
        &self,
        symbol: &str,
        message: &str,
        notifications: &NotificationSettings,
    ) -> bool {
        let Some((token, chat_id)) = notifications.credentials.pair() else {
            warn!(symbol, "alerts enabled but bot token or chat id is missing");
            return false;
        };

        if let Err(e) = self.notifier.deliver(message, token, chat_id).await {
            warn!(symbol, error = %e, "failed to deliver alert");
        } else {
            info!(symbol, "alert sent");
        }
        true
    }
}
