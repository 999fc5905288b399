//! Redundant Assertion — an assertion that can only ever pass.
//!
//! `assert.equal(5, 5)` and `expect(true).toBeTruthy()` verify nothing:
//! every compared argument is a literal of identical type and value.

use sniff_core::types::collections::FxHashSet;

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::Node;
use crate::lang;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct RedundantAssertion;

/// The `expect(<single literal>)` call at the base of a matcher chain.
fn base_expect(node: &Node) -> Option<&Node> {
    let (callee, _) = node.as_call()?;
    let (mut object, _) = callee.as_member()?;
    while let Some((inner, _)) = object.as_member() {
        object = inner;
    }
    let (inner_callee, args) = object.as_call()?;
    if inner_callee.as_identifier() == Some("expect")
        && args.len() == 1
        && lang::is_literal(&args[0])
    {
        return Some(object);
    }
    None
}

/// Non-empty argument list of identical literals.
fn all_identical_literals(args: &[Node]) -> bool {
    !args.is_empty()
        && args.iter().all(lang::is_literal)
        && args.windows(2).all(|pair| lang::literal_eq(&pair[0], &pair[1]))
}

impl Rule for RedundantAssertion {
    fn name(&self) -> &'static str {
        "Redundant Assertion"
    }

    fn package(&self) -> &'static str {
        "redundantAssertion"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            let mut found: Vec<(u32, Smell)> = Vec::new();
            let mut chained_expects: FxHashSet<u32> = FxHashSet::default();

            test_case.walk(&mut |node| {
                if lang::is_assertion(node) || lang::is_chai_assert(node) {
                    let Some((_, args)) = node.as_call() else {
                        return;
                    };
                    if all_identical_literals(args) {
                        found.push((node.span.start_byte, smell_at(node)));
                    }
                } else if let Some((_, matcher_args)) = node.as_call() {
                    // Matcher chain rooted at `expect(<literal>)`: the
                    // matcher's own literal arguments must match it too.
                    let Some(expect_call) = base_expect(node) else {
                        return;
                    };
                    chained_expects.insert(expect_call.span.start_byte);
                    let Some((_, expect_args)) = expect_call.as_call() else {
                        return;
                    };
                    let literal = &expect_args[0];
                    if matcher_args
                        .iter()
                        .all(|arg| lang::is_literal(arg) && lang::literal_eq(arg, literal))
                    {
                        found.push((node.span.start_byte, smell_at(node)));
                    }
                }
            });

            // Bare `expect(<literal>)` property chains, e.g. `.to.be.true`.
            test_case.walk(&mut |node| {
                if !lang::is_chai_bdd(node) || chained_expects.contains(&node.span.start_byte) {
                    return;
                }
                let Some((_, args)) = node.as_call() else {
                    return;
                };
                if args.len() == 1 && lang::is_literal(&args[0]) {
                    found.push((node.span.start_byte, smell_at(node)));
                }
            });

            found.sort_by_key(|(start_byte, _)| *start_byte);
            results.extend(found.into_iter().map(|(_, smell)| smell));
        });
        results
    }
}
