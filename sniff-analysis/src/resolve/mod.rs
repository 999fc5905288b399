//! Cross-file production-code resolution.
//!
//! Maps a test file's relative imports onto production source files and
//! extracts their exported API. Resolution is derived purely from
//! file-system content — no cross-file cache, fully reentrant — so the
//! production-code rules stay correct under per-file parallelism.

pub mod exports;
pub mod strategies;

use std::path::Path;

use crate::ast::Node;
use crate::lang;
use crate::parsers;
use crate::types::{ProductionSymbol, ResolvedImport};

pub use strategies::resolve;

/// Resolve every relative import of the file against its directory.
///
/// A miss is not an error: the import is carried with `resolved: None` and
/// simply drops out of symbol correlation.
pub fn resolve_imports(root: &Node, base_dir: &Path) -> Vec<ResolvedImport> {
    lang::relative_imports(root)
        .into_iter()
        .map(|import| {
            let request = base_dir.join(&import.specifier);
            let resolved = strategies::resolve(&request);
            if resolved.is_none() {
                tracing::debug!(
                    specifier = %import.specifier,
                    base_dir = %base_dir.display(),
                    "import did not resolve to a local file"
                );
            }
            ResolvedImport { specifier: import.specifier, alias: import.alias, resolved }
        })
        .collect()
}

/// Collect the production symbols reachable from the file's imports.
///
/// Unreadable or malformed production files degrade to partial extraction;
/// they never abort the run.
pub fn production_symbols(root: &Node, base_dir: &Path) -> Vec<ProductionSymbol> {
    let mut names: Vec<String> = Vec::new();
    for import in resolve_imports(root, base_dir) {
        let Some(path) = import.resolved else {
            continue;
        };
        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping unreadable production file");
                continue;
            }
        };
        match parsers::parse(&source, &path) {
            Ok(outcome) => names.extend(exports::exported_names(&outcome.root)),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping unparseable production file");
            }
        }
    }

    // Duplicate names collapse by equality, first occurrence order kept.
    let mut seen = sniff_core::types::collections::FxHashSet::default();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .map(|name| ProductionSymbol { name })
        .collect()
}
