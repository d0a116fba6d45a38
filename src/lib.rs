//! Sell/hold/buy advisor for a single crypto holding.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod render;
pub mod services;
pub mod signals;
