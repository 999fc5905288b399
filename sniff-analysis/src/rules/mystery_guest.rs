//! Mystery Guest — tests reaching into the file system or network.
//!
//! A file that mocks its HTTP traffic with a recognized convention is
//! trusted wholesale: the point of the convention is exactly to keep the
//! guest out.

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::{Node, NodeKind};
use crate::lang;
use crate::types::{Smell, SourceUnit};

const MYSTERY_MODULES: &[&str] = &["fs", "http"];

const MYSTERY_METHODS: &[(&str, &str)] = &[
    ("fs", "access"),
    ("fs", "readFile"),
    ("fs", "readFileSync"),
    ("fs", "exists"),
    ("fs", "existsSync"),
    ("fs", "unlink"),
    ("fs", "unlinkSync"),
    ("http", "get"),
    ("http", "request"),
];

const MOCK_MODULES: &[&str] = &["nock", "sinon"];

#[derive(Debug, Default)]
pub struct MysteryGuest;

/// A `nock`/`sinon` require or import, including the `require('..')`
/// self-import used inside the nock project itself.
fn has_mock_modules(root: &Node) -> bool {
    let mut found = false;
    root.walk(&mut |node| match &node.kind {
        NodeKind::VariableDeclaration { declarators, .. } => {
            let Some(first) = declarators.first() else {
                return;
            };
            let NodeKind::Declarator { name, init: Some(init) } = &first.kind else {
                return;
            };
            let Some(specifier) = lang::require_specifier(init) else {
                return;
            };
            if MOCK_MODULES.contains(&specifier) || (name == "nock" && specifier == "..") {
                found = true;
            }
        }
        NodeKind::Import { source, .. } => {
            if MOCK_MODULES.contains(&source.as_str()) {
                found = true;
            }
        }
        _ => {}
    });
    found
}

/// A nock-style call chain: `nock(..).get(..)`, `nock.recorder...`.
fn has_nock_expression(root: &Node) -> bool {
    let mut found = false;
    root.walk(&mut |node| {
        let Some((object, property)) = node.as_member() else {
            return;
        };
        let object_is_nock = object.as_identifier() == Some("nock")
            || matches!(
                object.as_call(),
                Some((callee, _)) if callee.as_identifier() == Some("nock")
            );
        if object_is_nock && matches!(property, "get" | "post" | "define") {
            found = true;
        }
        if matches!(
            object.as_member(),
            Some((inner, inner_property))
                if inner.as_identifier() == Some("nock")
                    && matches!(inner_property, "recorder" | "get")
        ) {
            found = true;
        }
    });
    found
}

impl Rule for MysteryGuest {
    fn name(&self) -> &'static str {
        "Mystery Guest"
    }

    fn package(&self) -> &'static str {
        "mysteryGuest"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        if has_mock_modules(&unit.tree) && has_nock_expression(&unit.tree) {
            return Vec::new();
        }

        let aliases = lang::module_aliases(&unit.tree, MYSTERY_MODULES);
        if aliases.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            test_case.walk(&mut |node| {
                let Some((object, property)) = node.as_member() else {
                    return;
                };
                for (module, alias) in &aliases {
                    if object.as_identifier() != Some(alias.as_str()) {
                        continue;
                    }
                    if MYSTERY_METHODS
                        .iter()
                        .any(|(m, method)| m == module && *method == property)
                    {
                        results.push(smell_at(node));
                    }
                }
            });
        });
        results
    }
}
