//! CLI library components for the beneficiary identifier tool.

pub mod logging;
pub mod pipeline;
pub mod types;
