//! Report aggregation — run-level totals over a set of detections.
//!
//! The engine stays a pure function from source files to findings; this
//! module only folds the findings into the shape the external reporting
//! layer (terminal, HTML, JSON, CSV) consumes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::registry::RuleRegistry;
use crate::types::{Detection, RuleResult};

/// Run-level aggregate over every analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub project: String,
    /// Files confirmed as test suites and analyzed.
    pub test_suites: usize,
    /// Test cases across the smelled files.
    pub test_cases: usize,
    /// Files with at least one finding.
    pub smelled_test_suites: usize,
    /// Total findings across the run.
    pub smells: usize,
    pub files: Vec<FileSummary>,
}

/// Per-file slice of the report; only smelled files appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub test_cases: usize,
    pub smells: usize,
    pub results: Vec<RuleResult>,
}

impl Report {
    /// Fold a run's detections into the aggregate.
    pub fn from_detections(project: &str, detections: &[Detection]) -> Report {
        let files: Vec<FileSummary> = detections
            .iter()
            .filter(|detection| !detection.results.is_empty())
            .map(|detection| FileSummary {
                path: detection.path.clone(),
                test_cases: detection.test_cases,
                smells: detection.total_smells,
                results: detection.results.clone(),
            })
            .collect();

        Report {
            project: project.to_string(),
            test_suites: detections.len(),
            test_cases: files.iter().map(|f| f.test_cases).sum(),
            smelled_test_suites: files.len(),
            smells: files.iter().map(|f| f.smells).sum(),
            files,
        }
    }

    /// Findings per rule in fixed catalog order, for fixed-column tabular
    /// output. Rules without findings report zero.
    pub fn rule_totals(&self, registry: &RuleRegistry) -> Vec<(String, usize)> {
        registry
            .package_identifiers()
            .into_iter()
            .map(|package| {
                let total: usize = self
                    .files
                    .iter()
                    .flat_map(|file| &file.results)
                    .filter(|result| result.package_identifier == package)
                    .map(|result| result.items.len())
                    .sum();
                (package.to_string(), total)
            })
            .collect()
    }
}
