//! Resource Optimism — file-system use without an existence check.
//!
//! Reading or writing a file the test merely hopes exists. Any
//! `fs.access` check in the file's test cases vouches for the whole file.

use super::{for_each_test_case, smell_at, Rule, RuleContext};
use crate::lang;
use crate::types::{Smell, SourceUnit};

const FS_METHODS: &[&str] = &["open", "readFile", "writeFile"];

#[derive(Debug, Default)]
pub struct ResourceOptimism;

impl Rule for ResourceOptimism {
    fn name(&self) -> &'static str {
        "Resource Optimism"
    }

    fn package(&self) -> &'static str {
        "resourceOptimism"
    }

    fn detect(&self, unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        let aliases = lang::module_aliases(&unit.tree, &["fs"]);
        if aliases.is_empty() {
            return Vec::new();
        }

        let mut existence_checks = 0usize;
        let mut uses = Vec::new();
        for_each_test_case(&unit.tree, &mut |test_case| {
            test_case.walk(&mut |node| {
                let Some((callee, _)) = node.as_call() else {
                    return;
                };
                let Some((object, property)) = callee.as_member() else {
                    return;
                };
                if !aliases
                    .iter()
                    .any(|(_, alias)| object.as_identifier() == Some(alias.as_str()))
                {
                    return;
                }
                if property == "access" {
                    existence_checks += 1;
                } else if FS_METHODS.contains(&property) {
                    uses.push(smell_at(node));
                }
            });
        });

        if existence_checks == 0 {
            uses
        } else {
            Vec::new()
        }
    }
}
