//! Rule catalog — sixteen stateless detectors sharing one contract.
//!
//! Rules never see each other's findings and hold no state across files;
//! everything they need arrives through the source unit and the per-file
//! context. Findings come back in document order — ordering is the rule's
//! responsibility, not the runner's.

pub mod assertion_roulette;
pub mod conditional_test_logic;
pub mod duplicate_assert;
pub mod eager_test;
pub mod empty_test;
pub mod exception_handling;
pub mod global_variable;
pub mod ignored_test;
pub mod lazy_test;
pub mod magic_number;
pub mod mystery_guest;
pub mod redundant_assertion;
pub mod redundant_print;
pub mod resource_optimism;

use std::path::Path;

use crate::ast::Node;
use crate::lang;
use crate::types::{Smell, SourceUnit};

pub use assertion_roulette::AssertionRoulette;
pub use conditional_test_logic::ConditionalTestLogic;
pub use duplicate_assert::DuplicateAssert;
pub use eager_test::EagerTest;
pub use empty_test::EmptyTest;
pub use exception_handling::ExceptionHandling;
pub use global_variable::GlobalVariable;
pub use ignored_test::IgnoredTest;
pub use lazy_test::LazyTest;
pub use magic_number::MagicNumber;
pub use mystery_guest::MysteryGuest;
pub use redundant_assertion::RedundantAssertion;
pub use redundant_print::RedundantPrint;
pub use resource_optimism::ResourceOptimism;
pub use sleepy_test::SleepyTest;
pub use unknown_test::UnknownTest;

/// Per-file analysis context. Built by the runner for each file; nothing
/// in it is shared or mutated across files.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Directory of the file under analysis; base for import resolution.
    pub base_dir: &'a Path,
    /// Whether the production-code rules may touch the file system.
    pub follow_imports: bool,
}

/// The detector contract.
pub trait Rule: Send + Sync {
    /// Fixed display name, e.g. `"Sleepy Test"`.
    fn name(&self) -> &'static str;
    /// Fixed package identifier, e.g. `"sleepyTest"`.
    fn package(&self) -> &'static str;
    /// Scan one parsed file. Findings are in document order.
    fn detect(&self, unit: &SourceUnit, ctx: &RuleContext<'_>) -> Vec<Smell>;
}

/// Visit every test-case call in the file, in document order.
pub(crate) fn for_each_test_case<'a>(root: &'a Node, f: &mut dyn FnMut(&'a Node)) {
    root.walk(&mut |node| {
        if lang::is_test_case(node) {
            f(node);
        }
    });
}

/// Smell at a node's own start position.
pub(crate) fn smell_at(node: &Node) -> Smell {
    Smell::new(node.span.start)
}
