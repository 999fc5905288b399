//! Smell detection engine for JavaScript/TypeScript test suites.
//!
//! Pipeline: discover test files, parse them with the error-tolerant
//! tree-sitter supplier, lower the CST into a tagged generic AST, then run
//! the sixteen-rule catalog against each file. Files are independent, so
//! per-file analysis fans out across a rayon pool.

pub mod ast;
pub mod frame;
pub mod lang;
pub mod parsers;
pub mod registry;
pub mod report;
pub mod resolve;
pub mod rules;
pub mod runner;
pub mod scanner;
pub mod types;

pub use registry::RuleRegistry;
pub use report::Report;
pub use scanner::Analyzer;
pub use types::{Detection, Location, RuleResult, Smell, SourceUnit};
