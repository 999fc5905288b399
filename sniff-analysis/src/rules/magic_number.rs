//! Magic Number — bare numeric literals fed straight into assertions.

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::ast::NodeKind;
use crate::lang;
use crate::types::{Smell, SourceUnit};

#[derive(Debug, Default)]
pub struct MagicNumber;

impl Rule for MagicNumber {
    fn name(&self) -> &'static str {
        "Magic Number"
    }

    fn package(&self) -> &'static str {
        "magicNumberRule"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let mut results = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            test_case.walk(&mut |node| {
                // Count matchers (`toBeCalledTimes` et al.) take counts,
                // not test data, so jest uses the exempt sublist.
                if lang::is_assertion(node)
                    || lang::is_chai_assert(node)
                    || lang::is_chai_bdd(node)
                    || lang::is_jest_without_count_matchers(node)
                {
                    let Some((_, args)) = node.as_call() else {
                        return;
                    };
                    results.extend(
                        args.iter()
                            .filter(|arg| matches!(arg.kind, NodeKind::NumberLit { .. }))
                            .map(|arg| smell_at(arg)),
                    );
                }
            });
        });
        results
    }
}
