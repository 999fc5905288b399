//! Assertion-centric rules: roulette, duplicate, magic number, redundant,
//! unknown.

use std::path::Path;

use sniff_analysis::rules::{
    AssertionRoulette, DuplicateAssert, MagicNumber, RedundantAssertion, Rule, RuleContext,
    UnknownTest,
};
use sniff_analysis::types::SourceUnit;

fn unit(source: &str) -> SourceUnit {
    let outcome = sniff_analysis::parsers::parse(source, Path::new("fixture.spec.js")).unwrap();
    SourceUnit {
        path: "fixture.spec.js".into(),
        text: source.to_string(),
        tree: outcome.root,
        parse_errors: outcome.error_count,
    }
}

fn detect(rule: &dyn Rule, source: &str) -> Vec<(u32, u32)> {
    let unit = unit(source);
    let ctx = RuleContext { base_dir: Path::new("."), follow_imports: true };
    rule.detect(&unit, &ctx)
        .iter()
        .map(|smell| (smell.location.line, smell.location.column))
        .collect()
}

#[test]
fn roulette_flags_the_messageless_assertion() {
    let source = r#"describe('suite', function () {
  it('checks', function () {
    assert.equal(1, 2);
    assert.ok(true, 'ok message');
  });
});
"#;
    assert_eq!(detect(&AssertionRoulette, source), vec![(3, 4)]);
}

#[test]
fn roulette_needs_at_least_two_assertions() {
    // A single message-capable assertion never triggers, message or not.
    let source = r#"it('solo', function () {
  assert.equal(1, 2);
});
"#;
    assert!(detect(&AssertionRoulette, source).is_empty());
}

#[test]
fn roulette_quiet_when_every_assertion_has_a_message() {
    let source = r#"it('labelled', function () {
  assert.equal(1, 2, 'first');
  assert.ok(true, 'second');
});
"#;
    assert!(detect(&AssertionRoulette, source).is_empty());
}

#[test]
fn roulette_counts_bare_assert_arity() {
    let source = r#"it('bare', function () {
  assert(ready);
  assert(done, 'done flag');
});
"#;
    assert_eq!(detect(&AssertionRoulette, source), vec![(2, 2)]);
}

#[test]
fn duplicate_assert_flags_every_member_of_the_group() {
    let source = r#"it('dups', function () {
  assert.equal(a, 1);
  assert.equal(a, 1);
  assert.equal(b, 2);
});
"#;
    assert_eq!(detect(&DuplicateAssert, source), vec![(2, 2), (3, 2)]);
}

#[test]
fn duplicate_assert_ignores_distinct_assertions() {
    let source = r#"it('distinct', function () {
  assert.equal(a, 1);
  assert.equal(b, 2);
});
"#;
    assert!(detect(&DuplicateAssert, source).is_empty());
}

#[test]
fn magic_number_flags_numeric_assertion_arguments() {
    let source = r#"it('magic', () => {
  assert.equal(total, 42);
  expect(7).toBe(sum);
});
"#;
    assert_eq!(detect(&MagicNumber, source), vec![(2, 22), (3, 9)]);
}

#[test]
fn magic_number_exempts_count_matchers() {
    let source = r#"it('counts', () => {
  expect(spy).toBeCalledTimes(2);
});
"#;
    assert!(detect(&MagicNumber, source).is_empty());
}

#[test]
fn redundant_assertion_flags_identical_literal_comparison() {
    // The sole assertion of the test case still counts.
    let source = r#"it('redundant', function () {
  assert.equal(5, 5);
});
"#;
    assert_eq!(detect(&RedundantAssertion, source), vec![(2, 2)]);
}

#[test]
fn redundant_assertion_flags_literal_expectations() {
    let source = r#"it('bdd', () => {
  expect(true).to.be.true;
  expect(true).toBe(true);
  expect(x).toBe(5);
});
"#;
    assert_eq!(detect(&RedundantAssertion, source), vec![(2, 2), (3, 2)]);
}

#[test]
fn redundant_assertion_flags_trivial_single_literals() {
    let source = r#"it('trivial', function () {
  assert(true);
  assert.ok(1);
});
"#;
    assert_eq!(detect(&RedundantAssertion, source), vec![(2, 2), (3, 2)]);
}

#[test]
fn redundant_assertion_ignores_differing_or_mixed_arguments() {
    let source = r#"it('mixed', function () {
  assert.strictEqual(true, false);
  assert.strictEqual('object', typeof proxy);
});
"#;
    assert!(detect(&RedundantAssertion, source).is_empty());
}

#[test]
fn unknown_test_flags_assertion_free_bodies() {
    let source = r#"it('has no assertion', function () {
  doWork();
});
it('asserts', function () {
  assert.ok(done);
});
"#;
    assert_eq!(detect(&UnknownTest, source), vec![(1, 0)]);
}

#[test]
fn unknown_test_accepts_should_style() {
    let source = r#"it('should style', function () {
  result.should.equal(expected);
});
"#;
    assert!(detect(&UnknownTest, source).is_empty());
}

#[test]
fn unknown_test_skips_empty_bodies() {
    // Empty bodies belong to Empty Test, not Unknown Test.
    let source = "it('empty', function () {});\n";
    assert!(detect(&UnknownTest, source).is_empty());
}
