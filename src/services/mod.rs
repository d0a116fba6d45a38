pub mod binance;
pub mod market_data;
pub mod telegram;

pub use market_data::*;
