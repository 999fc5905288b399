//! Configuration system for sniff.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod analysis_config;
pub mod scan_config;
pub mod sniff_config;

pub use analysis_config::AnalysisConfig;
pub use scan_config::ScanConfig;
pub use sniff_config::SniffConfig;
