//! Predicate library — stateless classification functions over the generic
//! AST. Every rule in the catalog is built from this vocabulary.
//!
//! The identifier lists are load-bearing: the rules are validated against
//! literal fixtures, so the recognized names must not drift.

use crate::ast::{Node, NodeKind};
use crate::types::Location;

/// Framework functions that open a test case.
pub const TEST_CALLEES: &[&str] = &["it", "test", "specify"];

/// Node `assert` module methods.
pub const ASSERT_METHODS: &[&str] = &[
    "deepEqual", "deepStrictEqual", "doesNotThrow",
    "equal", "ifError", "notDeepEqual", "notDeepStrictEqual",
    "notEqual", "notStrictEqual", "ok", "strictEqual",
];

/// Chai assert-style methods on the `assert` object.
pub const CHAI_ASSERT_METHODS: &[&str] = &[
    "assert", "isOk", "isNotOk", "equal", "notEqual", "strictEqual",
    "notStrictEqual", "deepEqual", "notDeepEqual", "isAbove",
    "isAtLeast", "isBelow", "isTrue", "isNotTrue", "isFalse",
    "isNotFalse", "isNull", "isNotNull", "isNaN", "isNotNaN", "exists",
    "notExists", "isUndefined", "isDefined", "isFunction", "isNotFunction",
    "isObject", "isNotObject", "isArray", "isNotArray", "isString", "isNotString",
    "isNumber", "isNotNumber", "isFinite", "isBoolean", "isNotBoolean",
    "typeOf", "notTypeOf", "instanceOf", "notInstanceOf", "include",
    "notInclude", "deepInclude", "notDeepInclude", "nestedInclude",
    "notNestedInclude", "deepNestedInclude", "notDeepNestedInclude",
    "ownInclude", "notOwnInclude", "deepOwnInclude", "notDeepOwnInclude",
    "match", "notMatch", "property", "notProperty", "propertyVal",
    "notPropertyVal", "deepPropertyVal", "notDeepPropertyVal",
    "nestedProperty", "notNestedProperty", "nestedPropertyVal",
    "notNestedPropertyVal", "deepNestedPropertyVal", "notDeepNestedPropertyVal",
    "lengthOf", "hasAnyKeys", "hasAllKeys", "containsAllKeys",
    "doesNotHaveAnyKeys", "doesNotHaveAllKeys", "hasAnyDeepKeys",
    "hasAllDeepKeys", "containsAllDeepKeys", "doesNotHaveAnyDeepKeys",
    "doesNotHaveAllDeepKeys", "throws", "doesNotThrow", "operator",
    "closeTo", "approximately", "sameMembers", "notSameMembers",
    "sameDeepMembers", "notSameDeepMembers", "sameOrderedMembers",
    "notSameOrderedMembers", "sameDeepOrderedMembers",
    "notSameDeepOrderedMembers", "includeMembers", "notIncludeMembers",
    "includeDeepMembers", "notIncludeDeepMembers", "includeOrderedMembers",
    "notIncludeOrderedMembers", "includeDeepOrderedMembers",
    "notIncludeDeepOrderedMembers", "oneOf", "changes", "changesBy",
    "doesNotChange", "changesButNotBy", "increases", "increasesBy",
    "doesNotIncrease", "increasesButNotBy", "decreases", "decreasesBy",
    "doesNotDecrease", "doesNotDecreaseBy", "decreasesButNotBy",
    "ifError", "isExtensible", "isNotExtensible", "isSealed",
    "isNotSealed", "isFrozen", "isNotFrozen", "isEmpty", "isNotEmpty",
];

/// Chai-http matcher methods.
pub const CHAI_HTTP_METHODS: &[&str] = &[
    "status", "header", "headers", "ip", "json", "html", "redirect",
    "redirectTo", "param", "cookie",
];

/// Jest matcher methods.
pub const JEST_METHODS: &[&str] = &[
    "toBe", "toEqual", "toBeFalsy", "toBeNull", "toBeTruthy", "toBeUndefined",
    "toBeDefined", "toBeInstanceOf", "toMatchObject", "toHaveProperty",
    "toContain", "toContainEqual", "toHaveLength", "toBeCloseTo",
    "toBeGreaterThan", "toBeGreaterThanOrEqual", "toBeLessThan",
    "toBeLessThanOrEqual", "toMatch", "toStrictEqual",
    "toHaveBeenCalled", "toHaveBeenCalledWith",
    "toBeCalledTimes", "nthCalledWith", "toThrow", "toThrowErrorMatchingSnapshot",
    "toThrowErrorMatchingInlineSnapshot", "toHaveReturned", "toHaveReturnedTimes",
    "toHaveReturnedWith", "toHaveLastReturnedWith", "toHaveNthReturnedWith",
    "toBeNaN", "toMatchSnapshot", "toMatchInlineSnapshot",
];

/// Jest matchers whose numeric arguments are counts, not test data.
const JEST_COUNT_MATCHERS: &[&str] = &["toBeCalledTimes", "nthCalledWith"];

/// A function expression or arrow function.
pub fn is_function_or_arrow(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Function { .. })
}

/// A test-case call: framework callee, string title, function-like body.
pub fn is_test_case(node: &Node) -> bool {
    let Some((callee, args)) = node.as_call() else {
        return false;
    };
    let Some(name) = callee.as_identifier() else {
        return false;
    };
    TEST_CALLEES.contains(&name)
        && matches!(args.first().map(|a| &a.kind), Some(NodeKind::StringLit { .. }))
        && args.iter().any(is_function_or_arrow)
}

/// Bare node-assert style: `assert(..)` or `assert.<method>(..)`.
pub fn is_assertion(node: &Node) -> bool {
    let Some((callee, _)) = node.as_call() else {
        return false;
    };
    if callee.as_identifier() == Some("assert") {
        return true;
    }
    matches!(
        callee.as_member(),
        Some((object, property))
            if object.as_identifier() == Some("assert") && ASSERT_METHODS.contains(&property)
    )
}

/// Chai assert style: `assert.<method>(..)` with the chai method list.
pub fn is_chai_assert(node: &Node) -> bool {
    let Some((callee, _)) = node.as_call() else {
        return false;
    };
    if callee.as_identifier() == Some("assert") {
        return true;
    }
    matches!(
        callee.as_member(),
        Some((object, property))
            if object.as_identifier() == Some("assert")
                && CHAI_ASSERT_METHODS.contains(&property)
    )
}

/// BDD expectation chain entry point: `expect(..)`.
pub fn is_chai_bdd(node: &Node) -> bool {
    matches!(node.as_call(), Some((callee, _)) if callee.as_identifier() == Some("expect"))
}

/// Fluent should style, checked on member accesses: `x.should...` or
/// `should.exist(x)`.
pub fn is_chai_should(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Member { object, property, .. } => {
            property == "should" || object.as_identifier() == Some("should")
        }
        _ => false,
    }
}

/// Chai-http matcher call.
pub fn is_chai_http(node: &Node) -> bool {
    matches!(
        node.as_call().and_then(|(callee, _)| callee.as_member()),
        Some((_, property)) if CHAI_HTTP_METHODS.contains(&property)
    )
}

/// Jest matcher call.
pub fn is_jest(node: &Node) -> bool {
    matches!(
        node.as_call().and_then(|(callee, _)| callee.as_member()),
        Some((_, property)) if JEST_METHODS.contains(&property)
    )
}

/// Jest matcher call, excluding matchers whose numeric arguments are
/// call counts rather than compared data.
pub fn is_jest_without_count_matchers(node: &Node) -> bool {
    matches!(
        node.as_call().and_then(|(callee, _)| callee.as_member()),
        Some((_, property))
            if JEST_METHODS.contains(&property) && !JEST_COUNT_MATCHERS.contains(&property)
    )
}

fn is_skip_call(node: &Node, objects: &[&str]) -> bool {
    matches!(
        node.as_call().and_then(|(callee, _)| callee.as_member()),
        Some((object, "skip"))
            if object.as_identifier().is_some_and(|name| objects.contains(&name))
    )
}

/// `it.skip(..)` / `test.skip(..)`.
pub fn is_test_case_ignored(node: &Node) -> bool {
    is_skip_call(node, &["test", "it"])
}

/// `describe.skip(..)` / `suite.skip(..)`.
pub fn is_describe_ignored(node: &Node) -> bool {
    is_skip_call(node, &["describe", "suite"])
}

/// `this.skip()` inside a mocha-style context.
pub fn is_this_expression_ignored(node: &Node) -> bool {
    matches!(
        node.as_call().and_then(|(callee, _)| callee.as_member()),
        Some((object, "skip")) if matches!(object.kind, NodeKind::This)
    )
}

/// Timer delay call: `setTimeout(..)`.
pub fn is_sleepy(node: &Node) -> bool {
    matches!(node.as_call(), Some((callee, _)) if callee.as_identifier() == Some("setTimeout"))
}

/// `console.<anything>` member access.
pub fn is_console(node: &Node) -> bool {
    matches!(
        node.as_member(),
        Some((object, _)) if object.as_identifier() == Some("console")
    )
}

/// Boolean, numeric, or string literal.
pub fn is_literal(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::BoolLit { .. } | NodeKind::NumberLit { .. } | NodeKind::StringLit { .. }
    )
}

/// Literal equality: same type and same value.
pub fn literal_eq(a: &Node, b: &Node) -> bool {
    match (&a.kind, &b.kind) {
        (NodeKind::BoolLit { value: x }, NodeKind::BoolLit { value: y }) => x == y,
        (NodeKind::NumberLit { raw: x }, NodeKind::NumberLit { raw: y }) => x == y,
        (NodeKind::StringLit { value: x }, NodeKind::StringLit { value: y }) => x == y,
        _ => false,
    }
}

/// The start of the member property on a call's callee, when there is one.
/// Several rules flag the property itself rather than the whole call.
pub fn callee_property_location(node: &Node) -> Option<Location> {
    let (callee, _) = node.as_call()?;
    match &callee.kind {
        NodeKind::Member { property_span, .. } => Some(property_span.start),
        _ => None,
    }
}

/// The specifier of a `require("...")` call.
pub fn require_specifier(node: &Node) -> Option<&str> {
    let (callee, args) = node.as_call()?;
    if callee.as_identifier()? != "require" {
        return None;
    }
    match &args.first()?.kind {
        NodeKind::StringLit { value } => Some(value),
        _ => None,
    }
}

/// Whether any call to `require` appears in the subtree.
pub fn contains_require(node: &Node) -> bool {
    let mut found = false;
    node.walk(&mut |n| {
        if let Some((callee, _)) = n.as_call() {
            if callee.as_identifier() == Some("require") {
                found = true;
            }
        }
    });
    found
}

/// Whether the file is a test suite: a `describe` or `it` identifier
/// appears anywhere.
pub fn is_test_suite(root: &Node) -> bool {
    let mut found = false;
    root.walk(&mut |n| match &n.kind {
        NodeKind::Identifier { name } if name == "describe" || name == "it" => found = true,
        NodeKind::Member { property, .. } if property == "describe" || property == "it" => {
            found = true
        }
        _ => {}
    });
    found
}

/// Number of test cases in the file.
pub fn count_test_cases(root: &Node) -> usize {
    let mut count = 0;
    root.walk(&mut |n| {
        if is_test_case(n) {
            count += 1;
        }
    });
    count
}

/// A relative import found in the file, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    pub specifier: String,
    pub alias: Option<String>,
}

/// Whether a specifier names local production source rather than a bare
/// package, a JSON fixture, or a package manifest.
pub fn is_local_specifier(specifier: &str) -> bool {
    (specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/'))
        && !specifier.ends_with(".json")
        && !specifier.contains("package")
}

/// Collect the file's relative imports: `require("<rel>")` declarators and
/// `import .. from "<rel>"` declarations.
pub fn relative_imports(root: &Node) -> Vec<ImportRef> {
    let mut imports = Vec::new();
    root.walk(&mut |n| match &n.kind {
        NodeKind::Declarator { name, init: Some(init) } => {
            if let Some(specifier) = require_specifier(init) {
                if is_local_specifier(specifier) {
                    imports.push(ImportRef {
                        specifier: specifier.to_string(),
                        alias: Some(name.clone()),
                    });
                }
            }
        }
        NodeKind::Import { source, specifiers } => {
            if is_local_specifier(source) {
                imports.push(ImportRef {
                    specifier: source.clone(),
                    alias: specifiers.first().and_then(local_import_name),
                });
            }
        }
        _ => {}
    });
    imports
}

/// Aliases under which the given modules are required or imported in the
/// file: `const fs = require('fs')`, `import fs from 'fs'`.
pub fn module_aliases(root: &Node, modules: &[&str]) -> Vec<(String, String)> {
    let mut aliases = Vec::new();
    root.walk(&mut |n| match &n.kind {
        NodeKind::VariableDeclaration { declarators, .. } => {
            let Some(first) = declarators.first() else {
                return;
            };
            if let NodeKind::Declarator { name, init: Some(init) } = &first.kind {
                if let Some(specifier) = require_specifier(init) {
                    if modules.contains(&specifier) {
                        aliases.push((specifier.to_string(), name.clone()));
                    }
                }
            }
        }
        NodeKind::Import { source, specifiers } => {
            if modules.contains(&source.as_str()) {
                if let Some(local) = specifiers.first().and_then(local_import_name) {
                    aliases.push((source.clone(), local));
                }
            }
        }
        _ => {}
    });
    aliases
}

fn local_import_name(specifier: &Node) -> Option<String> {
    match &specifier.kind {
        NodeKind::ImportSpecifier { name, alias } => {
            Some(alias.clone().unwrap_or_else(|| name.clone()))
        }
        _ => None,
    }
}
