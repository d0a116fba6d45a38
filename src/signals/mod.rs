//! Signal evaluation interfaces.

pub mod alert;
pub mod engine;

pub use alert::*;
pub use engine::*;
