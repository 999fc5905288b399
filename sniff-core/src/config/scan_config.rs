//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for file discovery and ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Worker threads for per-file analysis. Default: rayon's choice.
    pub threads: Option<usize>,
    /// Path segments excluded from discovery, in addition to the built-in
    /// `node_modules` and `dist`.
    #[serde(default)]
    pub extra_exclude: Vec<String>,
    /// Maximum file size in bytes; larger files are skipped. Default: none.
    pub max_file_size: Option<u64>,
}
