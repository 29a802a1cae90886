//! CLI library components for seedgen.

pub mod config;
pub mod logging;
pub mod pipeline;
