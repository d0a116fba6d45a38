//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod params;
pub mod report;
pub mod signal;

pub use indicators::{Candle, RsiIndicator};
pub use params::{NotificationCredentials, NotificationSettings, ParameterError, UserParameters};
pub use report::{AnalysisReport, MetricsView, Severity, VerdictLine};
pub use signal::{Classification, Verdict};
