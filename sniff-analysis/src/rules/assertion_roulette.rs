//! Assertion Roulette — several assertions, at least one without a message.
//!
//! When a test with multiple message-capable assertions fails, an
//! assertion without its message argument gives no hint which check broke.

use smallvec::SmallVec;

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::Node;
use crate::types::{Smell, SourceUnit};

/// Message-capable assertion methods and their arity including the
/// trailing message argument.
const MESSAGE_ARITY: &[(&str, usize)] = &[
    ("assert", 2),
    ("deepEqual", 3),
    ("deepStrictEqual", 3),
    ("doesNotMatch", 3),
    ("equal", 3),
    ("fail", 1),
    ("notEqual", 3),
    ("notDeepEqual", 3),
    ("ok", 2),
    ("strictEqual", 3),
];

#[derive(Debug, Default)]
pub struct AssertionRoulette;

/// Arity-with-message of a call, when it is a message-capable assertion.
fn message_arity(node: &Node) -> Option<usize> {
    let (callee, _) = node.as_call()?;
    if callee.as_identifier() == Some("assert") {
        return Some(2);
    }
    let (object, property) = callee.as_member()?;
    if object.as_identifier() != Some("assert") {
        return None;
    }
    MESSAGE_ARITY
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, arity)| *arity)
}

impl Rule for AssertionRoulette {
    fn name(&self) -> &'static str {
        "Assertion Roulette"
    }

    fn package(&self) -> &'static str {
        "assertionRoulette"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            let mut assertions: SmallVec<[(&Node, usize); 8]> = SmallVec::new();
            test_case.walk(&mut |node| {
                if let Some(arity) = message_arity(node) {
                    assertions.push((node, arity));
                }
            });
            // One lone assertion is unambiguous, message or not.
            if assertions.len() > 1 {
                results.extend(
                    assertions
                        .iter()
                        .filter(|(node, arity)| {
                            node.as_call().is_some_and(|(_, args)| args.len() != *arity)
                        })
                        .map(|(node, _)| smell_at(node)),
                );
            }
        });
        results
    }
}
