//! Module resolution chain: direct file, package entry, index fallback,
//! not-found.

use std::path::Path;

use sniff_analysis::resolve::{self, strategies};
use sniff_analysis::types::SourceUnit;

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn touch(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

#[test]
fn resolves_a_file_with_appended_extension() {
    let dir = tempdir();
    touch(&dir.path().join("mod.js"), "module.exports = noop;");
    assert_eq!(
        strategies::resolve(&dir.path().join("mod")),
        Some(dir.path().join("mod.js"))
    );
}

#[test]
fn resolves_a_verbatim_path() {
    let dir = tempdir();
    touch(&dir.path().join("mod.cjs"), "module.exports = noop;");
    assert_eq!(
        strategies::resolve(&dir.path().join("mod.cjs")),
        Some(dir.path().join("mod.cjs"))
    );
}

#[test]
fn tries_every_script_extension() {
    let dir = tempdir();
    touch(&dir.path().join("mod.mjs"), "export function noop() {}");
    assert_eq!(
        strategies::resolve(&dir.path().join("mod")),
        Some(dir.path().join("mod.mjs"))
    );
}

#[test]
fn resolves_a_package_entry_point() {
    let dir = tempdir();
    let pkg = dir.path().join("pkg");
    touch(&pkg.join("package.json"), r#"{ "main": "lib/entry.js" }"#);
    touch(&pkg.join("lib/entry.js"), "module.exports = noop;");
    assert_eq!(strategies::resolve(&pkg), Some(pkg.join("lib/entry.js")));
}

#[test]
fn missing_package_entry_falls_through_to_index() {
    // The manifest names an entry file that does not exist; the chain must
    // reach the index strategy instead of failing outright.
    let dir = tempdir();
    let pkg = dir.path().join("pkg");
    touch(&pkg.join("package.json"), r#"{ "main": "lib/gone.js" }"#);
    touch(&pkg.join("index.js"), "module.exports = noop;");
    assert_eq!(strategies::resolve(&pkg), Some(pkg.join("index.js")));
}

#[test]
fn malformed_manifest_falls_through_to_index() {
    let dir = tempdir();
    let pkg = dir.path().join("pkg");
    touch(&pkg.join("package.json"), "{ not json");
    touch(&pkg.join("index.cjs"), "module.exports = noop;");
    assert_eq!(strategies::resolve(&pkg), Some(pkg.join("index.cjs")));
}

#[test]
fn unresolvable_requests_are_not_an_error() {
    let dir = tempdir();
    assert_eq!(strategies::resolve(&dir.path().join("nowhere")), None);
}

#[test]
fn resolution_is_deterministic() {
    let dir = tempdir();
    touch(&dir.path().join("mod.js"), "module.exports = noop;");
    let request = dir.path().join("mod");
    assert_eq!(strategies::resolve(&request), strategies::resolve(&request));
}

fn parse_unit(source: &str) -> SourceUnit {
    let outcome = sniff_analysis::parsers::parse(source, Path::new("suite.spec.js")).unwrap();
    SourceUnit {
        path: "suite.spec.js".into(),
        text: source.to_string(),
        tree: outcome.root,
        parse_errors: outcome.error_count,
    }
}

#[test]
fn resolve_imports_carries_misses_as_unresolved() {
    let dir = tempdir();
    touch(&dir.path().join("lib.js"), "export function run() {}");
    let unit = parse_unit(
        r#"const lib = require('./lib');
const gone = require('./gone');
const chai = require('chai');
"#,
    );
    let imports = resolve::resolve_imports(&unit.tree, dir.path());
    // Bare package names are never attempted.
    assert_eq!(imports.len(), 2);
    assert_eq!(imports[0].specifier, "./lib");
    assert_eq!(imports[0].resolved, Some(dir.path().join("lib.js")));
    assert_eq!(imports[1].specifier, "./gone");
    assert_eq!(imports[1].resolved, None);
}

#[test]
fn production_symbols_collapse_duplicates() {
    let dir = tempdir();
    touch(
        &dir.path().join("a.js"),
        "export function shared() {}\nexport function onlyA() {}",
    );
    touch(
        &dir.path().join("b.js"),
        "export function shared() {}\nexport function onlyB() {}",
    );
    let unit = parse_unit(
        r#"const a = require('./a');
const b = require('./b');
"#,
    );
    let names: Vec<String> = resolve::production_symbols(&unit.tree, dir.path())
        .into_iter()
        .map(|symbol| symbol.name)
        .collect();
    assert_eq!(names, vec!["shared", "onlyA", "onlyB"]);
}

#[test]
fn unreadable_production_files_degrade_to_partial_extraction() {
    let dir = tempdir();
    touch(&dir.path().join("good.js"), "export function keep() {}");
    let unit = parse_unit(
        r#"const good = require('./good');
const bad = require('./bad');
"#,
    );
    let names: Vec<String> = resolve::production_symbols(&unit.tree, dir.path())
        .into_iter()
        .map(|symbol| symbol.name)
        .collect();
    assert_eq!(names, vec!["keep"]);
}
