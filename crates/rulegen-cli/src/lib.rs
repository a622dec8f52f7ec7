//! CLI library components for the schema rule generator.

pub mod logging;
pub mod output;
