//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the detection subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Package identifiers of the rules to run. Empty means the full catalog.
    #[serde(default)]
    pub enabled_rules: Vec<String>,
    /// Context lines on each side of a flagged location in rendered
    /// excerpts. Default: 2.
    pub context_lines: Option<u32>,
    /// Resolve relative imports for the production-code rules. Default: true.
    pub follow_imports: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective excerpt context, defaulting to 2 lines.
    pub fn effective_context_lines(&self) -> u32 {
        self.context_lines.unwrap_or(2)
    }

    /// Returns whether import resolution is enabled, defaulting to true.
    pub fn effective_follow_imports(&self) -> bool {
        self.follow_imports.unwrap_or(true)
    }
}
