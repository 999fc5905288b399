//! Rule registry — static, init-time table of rule constructors.
//!
//! No filesystem involvement: the catalog is compiled in and queryable
//! (names, package identifiers) without running any analysis. Detectors
//! are instantiated fresh per file through the stored constructors.

use sniff_core::errors::DetectionError;
use sniff_core::types::collections::FxHashSet;

use crate::rules::{
    AssertionRoulette, ConditionalTestLogic, DuplicateAssert, EagerTest, EmptyTest,
    ExceptionHandling, GlobalVariable, IgnoredTest, LazyTest, MagicNumber, MysteryGuest,
    RedundantAssertion, RedundantPrint, ResourceOptimism, Rule, SleepyTest, UnknownTest,
};

/// Constructor for one catalog entry.
pub type RuleCtor = fn() -> Box<dyn Rule>;

fn ctor<R: Rule + Default + 'static>() -> Box<dyn Rule> {
    Box::new(R::default())
}

/// The installed detector set, in catalog order.
const CATALOG: &[RuleCtor] = &[
    ctor::<AssertionRoulette>,
    ctor::<ConditionalTestLogic>,
    ctor::<DuplicateAssert>,
    ctor::<EagerTest>,
    ctor::<EmptyTest>,
    ctor::<ExceptionHandling>,
    ctor::<GlobalVariable>,
    ctor::<IgnoredTest>,
    ctor::<LazyTest>,
    ctor::<MagicNumber>,
    ctor::<MysteryGuest>,
    ctor::<RedundantAssertion>,
    ctor::<RedundantPrint>,
    ctor::<ResourceOptimism>,
    ctor::<SleepyTest>,
    ctor::<UnknownTest>,
];

/// Maps package identifier to constructor; enumerated once per process.
#[derive(Clone, Debug)]
pub struct RuleRegistry {
    ctors: Vec<RuleCtor>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// Registry over the full compiled-in catalog.
    pub fn new() -> Self {
        Self { ctors: CATALOG.to_vec() }
    }

    /// Registry restricted to the given package identifiers. An empty list
    /// means the full catalog; an unknown identifier is fatal.
    pub fn with_rules(enabled: &[String]) -> Result<Self, DetectionError> {
        if enabled.is_empty() {
            return Ok(Self::new());
        }
        let mut ctors = Vec::with_capacity(enabled.len());
        for id in enabled {
            let found = CATALOG
                .iter()
                .find(|build| build().package() == id.as_str())
                .ok_or_else(|| DetectionError::UnknownRule { id: id.clone() })?;
            ctors.push(*found);
        }
        Self::from_ctors(ctors)
    }

    /// Build a registry from an explicit constructor list, rejecting
    /// duplicate package identifiers.
    pub fn from_ctors(ctors: Vec<RuleCtor>) -> Result<Self, DetectionError> {
        let mut seen = FxHashSet::default();
        for build in &ctors {
            let id = build().package();
            if !seen.insert(id) {
                return Err(DetectionError::DuplicateRule { id: id.to_string() });
            }
        }
        Ok(Self { ctors })
    }

    /// Fresh instances of every registered rule, in catalog order.
    pub fn instantiate(&self) -> Vec<Box<dyn Rule>> {
        self.ctors.iter().map(|build| build()).collect()
    }

    /// Display names of the registered rules, in catalog order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.ctors.iter().map(|build| build().name()).collect()
    }

    /// Package identifiers of the registered rules, in catalog order.
    /// Stable across runs — used for fixed-column tabular output.
    pub fn package_identifiers(&self) -> Vec<&'static str> {
        self.ctors.iter().map(|build| build().package()).collect()
    }

    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }
}
