//! Registry and runner behavior: catalog shape, fault isolation,
//! determinism, aggregate invariants, report folding.

use std::path::Path;

use sniff_analysis::registry::RuleRegistry;
use sniff_analysis::report::Report;
use sniff_analysis::rules::{Rule, RuleContext, SleepyTest};
use sniff_analysis::runner;
use sniff_analysis::types::{Smell, SourceUnit};
use sniff_core::errors::DetectionError;

fn unit(source: &str) -> SourceUnit {
    let outcome = sniff_analysis::parsers::parse(source, Path::new("fixture.spec.js")).unwrap();
    SourceUnit {
        path: "fixture.spec.js".into(),
        text: source.to_string(),
        tree: outcome.root,
        parse_errors: outcome.error_count,
    }
}

fn ctx() -> RuleContext<'static> {
    RuleContext { base_dir: Path::new("."), follow_imports: false }
}

// Exactly one smell (Sleepy Test): the assertion keeps Unknown Test quiet.
const SLEEPY_FIXTURE: &str = r#"it('waits', function (done) {
  setTimeout(done, 100);
  assert.ok(done, 'done exists');
});
"#;

#[test]
fn catalog_is_complete_and_ordered() {
    let registry = RuleRegistry::new();
    assert_eq!(registry.len(), 16);
    assert_eq!(
        registry.package_identifiers(),
        vec![
            "assertionRoulette",
            "conditionalTestLogic",
            "duplicateAssert",
            "eagerTest",
            "emptyTest",
            "exceptionHandling",
            "globalVariable",
            "ignoredTest",
            "lazyTest",
            "magicNumberRule",
            "mysteryGuest",
            "redundantAssertion",
            "redundantPrint",
            "resourceOptimism",
            "sleepyTest",
            "unknownTest",
        ]
    );
    assert_eq!(registry.rule_names()[0], "Assertion Roulette");
    assert_eq!(registry.rule_names()[15], "Unknown Test");
}

#[test]
fn with_rules_filters_the_catalog() {
    let registry =
        RuleRegistry::with_rules(&["sleepyTest".to_string(), "emptyTest".to_string()]).unwrap();
    assert_eq!(registry.package_identifiers(), vec!["sleepyTest", "emptyTest"]);
}

#[test]
fn unknown_rule_identifier_is_fatal() {
    let err = RuleRegistry::with_rules(&["noSuchRule".to_string()]).unwrap_err();
    assert!(matches!(err, DetectionError::UnknownRule { .. }));
}

#[test]
fn duplicate_rule_identifier_is_fatal() {
    fn sleepy() -> Box<dyn Rule> {
        Box::new(SleepyTest)
    }
    let err = RuleRegistry::from_ctors(vec![sleepy, sleepy]).unwrap_err();
    assert!(matches!(err, DetectionError::DuplicateRule { .. }));
}

#[derive(Default)]
struct PanickingRule;

impl Rule for PanickingRule {
    fn name(&self) -> &'static str {
        "Panicking Rule"
    }
    fn package(&self) -> &'static str {
        "panickingRule"
    }
    fn detect(&self, _unit: &SourceUnit, _ctx: &RuleContext<'_>) -> Vec<Smell> {
        panic!("intentional fault");
    }
}

#[test]
fn a_faulty_rule_does_not_take_down_the_rest() {
    fn faulty() -> Box<dyn Rule> {
        Box::new(PanickingRule)
    }
    fn sleepy() -> Box<dyn Rule> {
        Box::new(SleepyTest)
    }
    let registry = RuleRegistry::from_ctors(vec![faulty, sleepy]).unwrap();
    let unit = unit(SLEEPY_FIXTURE);
    let detection = runner::run_rules(&registry, &unit, &ctx(), 2);
    assert_eq!(detection.results.len(), 1);
    assert_eq!(detection.results[0].package_identifier, "sleepyTest");
    assert_eq!(detection.total_smells, 1);
}

#[test]
fn zero_test_case_files_produce_no_findings() {
    let source = r#"describe('empty suite', function () {
  setTimeout(fn, 100);
  if (flag) { setup(); }
  console.log('hi');
  assert.equal(5, 5);
});
"#;
    let unit = unit(source);
    let detection = runner::run_rules(&RuleRegistry::new(), &unit, &ctx(), 2);
    assert!(detection.results.is_empty());
    assert_eq!(detection.total_smells, 0);
    assert_eq!(detection.test_cases, 0);
}

#[test]
fn empty_results_are_dropped_not_stored() {
    let unit = unit(SLEEPY_FIXTURE);
    let detection = runner::run_rules(&RuleRegistry::new(), &unit, &ctx(), 2);
    assert!(detection.results.iter().all(|result| !result.items.is_empty()));
    let item_sum: usize = detection.results.iter().map(|r| r.items.len()).sum();
    assert_eq!(detection.total_smells, item_sum);
}

#[test]
fn runner_is_deterministic() {
    let unit = unit(SLEEPY_FIXTURE);
    let first = runner::run_rules(&RuleRegistry::new(), &unit, &ctx(), 2);
    let second = runner::run_rules(&RuleRegistry::new(), &unit, &ctx(), 2);
    assert_eq!(first.results, second.results);
    assert_eq!(first.total_smells, second.total_smells);
}

#[test]
fn smells_carry_a_rendered_excerpt() {
    let unit = unit(SLEEPY_FIXTURE);
    let detection = runner::run_rules(&RuleRegistry::new(), &unit, &ctx(), 2);
    let sleepy = detection
        .results
        .iter()
        .find(|result| result.package_identifier == "sleepyTest")
        .unwrap();
    let frame = sleepy.items[0].frame.as_deref().unwrap();
    assert!(frame.contains("setTimeout(done, 100)"));
    assert!(frame.contains("^ Sleepy Test"));
}

#[test]
fn report_folds_detections_into_run_totals() {
    let registry = RuleRegistry::new();
    let smelly = runner::run_rules(&registry, &unit(SLEEPY_FIXTURE), &ctx(), 2);
    let clean = runner::run_rules(
        &registry,
        &unit("describe('clean', function () {});\n"),
        &ctx(),
        2,
    );

    let report = Report::from_detections("demo", &[smelly, clean]);
    assert_eq!(report.test_suites, 2);
    assert_eq!(report.smelled_test_suites, 1);
    assert_eq!(report.smells, 1);
    assert_eq!(report.test_cases, 1);

    // Fixed-column totals follow catalog order and include zero rows.
    let totals = report.rule_totals(&registry);
    assert_eq!(totals.len(), 16);
    assert_eq!(
        totals.iter().find(|(id, _)| id == "sleepyTest").unwrap().1,
        1
    );
    assert!(totals.iter().all(|(id, total)| id == "sleepyTest" || *total == 0));
}
