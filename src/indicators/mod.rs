pub mod momentum;

pub use momentum::*;
