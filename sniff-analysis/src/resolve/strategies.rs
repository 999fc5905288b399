//! Node-compatible import-to-file resolution.
//!
//! An ordered list of strategies evaluated in sequence with first-success
//! short-circuit: direct file, package manifest entry, index file,
//! not-found.

use std::path::{Path, PathBuf};

/// Extensions a specifier may omit.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "cjs", "mjs"];

type Strategy = fn(&Path) -> Option<PathBuf>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("file", as_file),
    ("package", as_package),
    ("index", as_index),
];

/// Resolve an import request (base directory already joined in) to a
/// production file. `None` is the terminal not-found outcome.
///
/// Resolution is a pure function of file-system content: deterministic and
/// idempotent for a given request.
pub fn resolve(request: &Path) -> Option<PathBuf> {
    for (name, strategy) in STRATEGIES {
        if let Some(path) = strategy(request) {
            tracing::trace!(strategy = name, path = %path.display(), "import resolved");
            return Some(path);
        }
    }
    None
}

fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Strategy 1: the path verbatim, then with each script extension appended.
fn as_file(request: &Path) -> Option<PathBuf> {
    if is_file(request) {
        return Some(request.to_path_buf());
    }
    SCRIPT_EXTENSIONS.iter().find_map(|ext| {
        let candidate = append_extension(request, ext);
        is_file(&candidate).then_some(candidate)
    })
}

/// Strategy 2: a directory with a package manifest naming an entry point.
///
/// A missing manifest, unparseable JSON, an absent `main` field, or a
/// declared entry that does not exist all fall through to the next
/// strategy.
fn as_package(request: &Path) -> Option<PathBuf> {
    let manifest_path = request.join("package.json");
    if !is_file(&manifest_path) {
        return None;
    }
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path).ok()?).ok()?;
    let main = manifest.get("main")?.as_str()?;
    let entry = request.join(main);
    is_file(&entry).then_some(entry)
}

/// Strategy 3: a directory containing an index file.
fn as_index(request: &Path) -> Option<PathBuf> {
    SCRIPT_EXTENSIONS
        .iter()
        .map(|ext| request.join(format!("index.{ext}")))
        .find(|candidate| is_file(candidate))
}

/// Append an extension without clobbering a final path segment that
/// already contains dots (`./v1.2/mod` -> `./v1.2/mod.js`).
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}
