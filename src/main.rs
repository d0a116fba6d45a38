//! One-shot analysis from the command line.
//!
//! Parameters come from the environment (see `AdvisorConfig::from_env`).
//! Set `CHART_OUT` to also write the chart as an SVG file.

use dotenvy::dotenv;
use sellwise::config::AdvisorConfig;
use sellwise::core::analysis::AnalysisService;
use sellwise::logging;
use sellwise::models::report::AnalysisReport;
use sellwise::services::binance::BinanceMarketDataProvider;
use sellwise::services::telegram::TelegramNotifier;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_logging();

    let config = match AdvisorConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let service = AnalysisService::new(
        Arc::new(BinanceMarketDataProvider::with_base_url(
            config.binance_base_url.clone(),
        )),
        Arc::new(TelegramNotifier::with_base_url(
            config.telegram_base_url.clone(),
        )),
    );

    info!(symbol = %config.params.symbol, "Fetching data for {}...", config.params.symbol);
    match service.analyze(&config.params, &config.notifications).await {
        Ok(report) => {
            print_report(&report);
            if let Ok(path) = env::var("CHART_OUT") {
                if let Err(e) = std::fs::write(&path, &report.chart_svg) {
                    error!(error = %e, path = %path, "failed to write chart");
                    return ExitCode::FAILURE;
                }
                info!(path = %path, "chart written");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &AnalysisReport) {
    let metrics = &report.metrics;
    println!("{}", report.symbol);
    println!("  Current Price:    {}", metrics.price);
    println!(
        "  RSI (Momentum):   {}{}",
        metrics.rsi,
        if metrics.rsi_flagged { "  (!)" } else { "" }
    );
    println!(
        "  Your Profit/Loss: {} ({})",
        metrics.profit_pct, metrics.profit_delta
    );
    println!();
    println!("Advisor Verdict");
    for line in &report.verdict_lines {
        println!("  {}", line.text);
    }
    if report.alert_dispatched {
        println!();
        println!("Telegram Alert Sent!");
    }
}
