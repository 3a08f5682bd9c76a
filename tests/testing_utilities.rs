//! Tests showing how the assertion macros read in downstream test suites.

use checklist::prelude::*;
use checklist::{assert_fails, assert_passes, assert_reasons};

// Example domain: validating display names for a user profile
fn display_name() -> ValidatorChain {
    ValidatorChain::new(not_empty())
        .with(starts_with_capital())
        .with(rule(|s: &str| s.chars().count() <= 20, "is too long"))
}

fn no_leading_space(input: &str) -> Verdict {
    Verdict::check(!input.starts_with(' '), "starts with space")
}

#[test]
fn test_assert_passes_with_valid_name() {
    assert_passes!(display_name().evaluate("Ferris"));
}

#[test]
fn test_assert_fails_with_lowercase_name() {
    assert_fails!(display_name().evaluate("ferris"));
}

#[test]
fn test_assert_reasons_lists_every_problem() {
    assert_reasons!(
        display_name().evaluate("a very long lowercase display name"),
        ["does not start with capital", "is too long"]
    );
}

#[test]
fn test_assert_reasons_on_blank_input() {
    assert_reasons!(
        display_name().evaluate(""),
        ["is empty", "does not start with capital"]
    );
}

#[test]
fn test_fn_item_predicate_in_chain() {
    let chain = display_name().with(no_leading_space);
    assert_reasons!(
        chain.evaluate(" Ferris"),
        ["does not start with capital", "starts with space"]
    );
}

#[test]
#[should_panic(expected = "Expected pass")]
fn test_assert_passes_reports_failures() {
    assert_passes!(display_name().evaluate("ferris"));
}
