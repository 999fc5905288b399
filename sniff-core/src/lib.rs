//! Core foundation for the sniff smell-detection engine.
//!
//! Holds the pieces every other crate leans on: error enums, the TOML
//! configuration layer, and shared collection aliases. No analysis logic
//! lives here.

pub mod config;
pub mod errors;
pub mod types;

pub use config::SniffConfig;
pub use errors::{ConfigError, DetectionError, ParseError, ScanError, SniffErrorCode};
