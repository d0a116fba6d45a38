//! Core application primitives (pipeline, HTTP server)

pub mod analysis;
pub mod http;

pub use analysis::*;
pub use http::*;
