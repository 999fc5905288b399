//! Tree-sitter parser subsystem — JavaScript/TypeScript dialects, error
//! recovery, lowering into the generic AST.

pub mod error_tolerant;

use std::path::Path;

use sniff_core::errors::ParseError;

use crate::ast::{self, Node};

/// Source dialect, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Detect the dialect from a file path. Unknown extensions fall back to
    /// JavaScript — the supplier is tolerant and ingestion filters
    /// non-suites anyway.
    pub fn from_path(path: &Path) -> Dialect {
        match path.extension().and_then(|e| e.to_str()) {
            Some("ts" | "mts" | "cts") => Dialect::TypeScript,
            Some("tsx") => Dialect::Tsx,
            _ => Dialect::JavaScript,
        }
    }

    /// Get the tree-sitter grammar for this dialect.
    pub fn ts_language(&self) -> tree_sitter::Language {
        match self {
            Dialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::JavaScript => "JavaScript",
            Dialect::TypeScript => "TypeScript",
            Dialect::Tsx => "TSX",
        }
    }
}

/// A lowered tree plus the supplier's recovery census.
#[derive(Debug)]
pub struct ParseOutcome {
    pub root: Node,
    /// ERROR/MISSING nodes recovered over; non-zero means detectors may
    /// under-report for this file.
    pub error_count: u32,
}

/// Parse source text into the generic AST.
///
/// Malformed input never fails here: tree-sitter recovers and the ERROR
/// subtrees are preserved as `Other` nodes. The only failures are a
/// grammar that cannot load or a parser that yields no tree at all.
pub fn parse(source: &str, path: &Path) -> Result<ParseOutcome, ParseError> {
    let dialect = Dialect::from_path(path);
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&dialect.ts_language())
        .map_err(|e| ParseError::GrammarLoadFailed {
            language: dialect.name().to_string(),
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::NoTree { path: path.display().to_string() })?;

    let (error_count, _) = error_tolerant::count_errors(tree.root_node());
    if error_count > 0 {
        tracing::debug!(
            path = %path.display(),
            error_count,
            "parse degraded, continuing with partial tree"
        );
    }

    Ok(ParseOutcome {
        root: ast::lower_tree(tree.root_node(), source),
        error_count,
    })
}
