//! Scanner subsystem — file discovery, ingestion, and the analyzer facade.
//!
//! Discovery expands a glob pattern to candidate paths (dependency and
//! build directories excluded); ingestion parses candidates and keeps only
//! confirmed test suites. Files are mutually independent, so the analyzer
//! fans per-file work out across a rayon pool.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use sniff_core::config::SniffConfig;
use sniff_core::errors::{DetectionError, ScanError};

use crate::lang;
use crate::parsers;
use crate::registry::RuleRegistry;
use crate::rules::RuleContext;
use crate::runner;
use crate::types::{Detection, SourceUnit};

/// Path segments never analyzed.
const EXCLUDED_SEGMENTS: &[&str] = &["node_modules", "dist"];

/// Expand a glob pattern to absolute candidate paths.
///
/// Zero matches is the fatal input-absent case: the run aborts and the
/// caller must adjust the pattern.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let entries = glob::glob(pattern).map_err(|e| ScanError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .filter(|path| !is_excluded(path, &[]))
        .map(|path| std::path::absolute(&path).unwrap_or(path))
        .collect();

    if files.is_empty() {
        return Err(ScanError::NoFilesMatched { pattern: pattern.to_string() });
    }
    Ok(files)
}

fn is_excluded(path: &Path, extra: &[String]) -> bool {
    path.components().any(|component| {
        let segment = component.as_os_str().to_string_lossy();
        EXCLUDED_SEGMENTS.contains(&segment.as_ref())
            || extra.iter().any(|e| e.as_str() == segment)
    })
}

/// Read and parse one candidate file, keeping it only if it is a test
/// suite. Read failures and non-suites are skipped, not errors.
pub fn ingest(path: &Path) -> Option<SourceUnit> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "skipping unreadable file");
            return None;
        }
    };
    let outcome = match parsers::parse(&text, path) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "skipping unparseable file");
            return None;
        }
    };
    if !lang::is_test_suite(&outcome.root) {
        return None;
    }
    Some(SourceUnit {
        path: path.to_path_buf(),
        text,
        tree: outcome.root,
        parse_errors: outcome.error_count,
    })
}

/// The engine facade: a configured registry plus the per-file pipeline.
pub struct Analyzer {
    registry: RuleRegistry,
    config: SniffConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer over the full catalog with default configuration.
    pub fn new() -> Self {
        Self { registry: RuleRegistry::new(), config: SniffConfig::default() }
    }

    /// Analyzer honoring the configuration's rule selection. An unknown
    /// rule identifier is fatal at construction.
    pub fn with_config(config: SniffConfig) -> Result<Self, DetectionError> {
        let registry = RuleRegistry::with_rules(&config.analysis.enabled_rules)?;
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Discover test files by pattern and analyze them all.
    pub fn analyze_pattern(&self, pattern: &str) -> Result<Vec<Detection>, ScanError> {
        let paths = discover(pattern)?;
        Ok(self.analyze_paths(&paths))
    }

    /// Analyze an externally supplied candidate list. Non-suite and
    /// unreadable files drop out silently; output order follows input
    /// order.
    pub fn analyze_paths(&self, paths: &[PathBuf]) -> Vec<Detection> {
        let run = || -> Vec<Detection> {
            paths
                .par_iter()
                .filter(|path| !is_excluded(path, &self.config.scan.extra_exclude))
                .filter(|path| self.within_size_limit(path))
                .filter_map(|path| ingest(path))
                .map(|unit| self.analyze_unit(&unit))
                .collect()
        };

        match self.config.scan.threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(run),
                Err(err) => {
                    tracing::warn!(error = %err, "thread pool setup failed, using default pool");
                    run()
                }
            },
            None => run(),
        }
    }

    /// Run the registered rules against one parsed file.
    pub fn analyze_unit(&self, unit: &SourceUnit) -> Detection {
        let base_dir = unit.path.parent().unwrap_or(Path::new("."));
        let ctx = RuleContext {
            base_dir,
            follow_imports: self.config.analysis.effective_follow_imports(),
        };
        runner::run_rules(
            &self.registry,
            unit,
            &ctx,
            self.config.analysis.effective_context_lines(),
        )
    }

    fn within_size_limit(&self, path: &Path) -> bool {
        match self.config.scan.max_file_size {
            Some(limit) => std::fs::metadata(path).map_or(true, |m| m.len() <= limit),
            None => true,
        }
    }
}
