//! Global Variable — loosely-scoped declarations in a test file.
//!
//! `var` declarations leak across test cases and invite order-dependent
//! tests. Module requires are exempt: `var lib = require('../lib')` is the
//! established CommonJS import form.

use super::{smell_at, Rule, RuleContext};
use crate::ast::{DeclKind, NodeKind};
use crate::lang;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct GlobalVariable;

impl Rule for GlobalVariable {
    fn name(&self) -> &'static str {
        "Global Variable"
    }

    fn package(&self) -> &'static str {
        "globalVariable"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        unit.tree.walk(&mut |node| {
            if let NodeKind::VariableDeclaration { decl_kind: DeclKind::Var, .. } = &node.kind {
                if !lang::contains_require(node) {
                    results.push(smell_at(node));
                }
            }
        });
        results
    }
}
