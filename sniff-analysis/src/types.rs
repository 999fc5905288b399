//! Data model shared by the rules, runner, and reporting consumers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ast::Node;

/// A source position: 1-based line, 0-based column.
///
/// The convention is load-bearing — findings are compared by value against
/// literal fixtures, so it must never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Byte range plus start position of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Location,
    pub start_byte: u32,
    pub end_byte: u32,
}

impl Span {
    /// Slice the node's source text out of the file it was parsed from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start_byte as usize..self.end_byte as usize]
    }
}

/// One flagged location. Two smells are equal iff their locations are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Smell {
    pub location: Location,
    /// Rendered source excerpt, attached by the runner.
    pub frame: Option<String>,
}

impl Smell {
    pub fn new(location: Location) -> Self {
        Self { location, frame: None }
    }

    pub fn at(line: u32, column: u32) -> Self {
        Self::new(Location::new(line, column))
    }
}

impl PartialEq for Smell {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for Smell {}

/// Findings of a single rule for a single file. Never stored empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_name: String,
    pub package_identifier: String,
    pub items: Vec<Smell>,
}

/// Per-file aggregate produced by the runner, consumed by the reporting
/// layer. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub path: PathBuf,
    pub text: String,
    pub test_cases: usize,
    pub total_smells: usize,
    pub results: Vec<RuleResult>,
}

/// A parsed test-suite file. Immutable after parse; passed by reference to
/// every rule.
#[derive(Debug)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
    pub tree: Node,
    /// ERROR/MISSING nodes the supplier recovered over. Non-zero means the
    /// rules may under-report for this file.
    pub parse_errors: u32,
}

/// A recognized export name from a resolved production file. Transient,
/// used only by the production-code rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductionSymbol {
    pub name: String,
}

/// A relative import and where it resolved, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImport {
    pub specifier: String,
    pub alias: Option<String>,
    pub resolved: Option<PathBuf>,
}
