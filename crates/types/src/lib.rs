//! Config schema and structured output types.

pub mod config;
pub mod output;
