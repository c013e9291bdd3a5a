//! CLI library components for the TDS statement converter.

pub mod logging;
pub mod output;
