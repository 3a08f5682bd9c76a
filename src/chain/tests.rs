use super::*;
use crate::chain;
use crate::predicate::*;
use crate::Verdict;

fn full_name() -> ValidatorChain {
    ValidatorChain::new(starts_with_capital()).with(has_single_space())
}

#[test]
fn test_two_predicates_pass_for_valid_data() {
    let result = full_name().evaluate("Hel lo");
    assert!(result.passed());
    assert!(result.reasons().is_empty());
}

#[test]
fn test_three_predicates_pass_for_valid_data() {
    let chain = chain![starts_with_capital(), has_single_space(), not_empty()];
    assert!(chain.evaluate("Hel lo").passed());
}

#[test]
fn test_fails_on_second_predicate() {
    let result = full_name().evaluate("Hello");
    assert!(result.failed());
    assert_eq!(result.reasons(), ["does not have single space"]);
}

#[test]
fn test_fails_on_first_predicate() {
    let result = full_name().evaluate("hel lo");
    assert!(result.failed());
    assert_eq!(result.reasons(), ["does not start with capital"]);
}

#[test]
fn test_reports_every_failure_in_order() {
    let result = full_name().evaluate("hello");
    assert_eq!(
        result.reasons(),
        ["does not start with capital", "does not have single space"]
    );
}

#[test]
fn test_order_follows_registration_not_severity() {
    let chain = chain![
        rule(|s: &str| s.len() > 10, "p1"),
        rule(|s: &str| s.is_ascii(), "p2"),
        rule(|s: &str| s.ends_with('!'), "p3"),
    ];
    assert_eq!(chain.evaluate("short").reasons(), ["p1", "p3"]);
}

#[test]
fn test_does_not_short_circuit() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counted = |calls: Arc<AtomicUsize>| {
        move |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            Verdict::fail("always")
        }
    };

    let chain = ValidatorChain::new(counted(calls.clone()))
        .with(counted(calls.clone()))
        .with(counted(calls.clone()));

    let result = chain.evaluate("anything");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(result.failure_count(), 3);
}

#[test]
fn test_add_predicate_is_fluent() {
    let mut chain = ValidatorChain::new(not_empty());
    chain
        .add_predicate(starts_with_capital())
        .add_predicate(has_single_space());
    assert_eq!(chain.len(), 3);
    assert!(!chain.is_empty());
    assert_eq!(
        chain.evaluate("   ").reasons(),
        [
            "is empty",
            "does not start with capital",
            "does not have single space"
        ]
    );
}

#[test]
fn test_from_predicates_keeps_order() {
    let chain =
        ValidatorChain::from_predicates(vec![has_single_space().boxed(), not_empty().boxed()])
            .unwrap();
    assert_eq!(
        chain.evaluate("").reasons(),
        ["does not have single space", "is empty"]
    );
}

#[test]
fn test_from_predicates_rejects_empty() {
    let err = ValidatorChain::from_predicates(Vec::new()).unwrap_err();
    assert_eq!(err, EmptyChainError);
}

#[test]
fn test_create_validator_matches_from_predicates() {
    let chain = create_validator(vec![starts_with_capital().boxed()]).unwrap();
    assert_eq!(chain.len(), 1);
    assert!(create_validator(Vec::new()).is_err());
}

#[test]
fn test_evaluate_is_idempotent() {
    let chain = full_name();
    assert_eq!(chain.evaluate("hello"), chain.evaluate("hello"));
}

#[test]
fn test_parse_success_keeps_input() {
    let name = full_name().parse("Grace Hopper").unwrap();
    assert_eq!(name.as_str(), "Grace Hopper");
    assert_eq!(&*name, "Grace Hopper");
    assert_eq!(name.to_string(), "Grace Hopper");
    assert_eq!(name.into_inner(), "Grace Hopper");
}

#[test]
fn test_parse_failure_returns_all_reasons() {
    let err = full_name().parse(String::from("grace")).unwrap_err();
    assert_eq!(
        err.into_reasons(),
        vec!["does not start with capital", "does not have single space"]
    );
}

#[test]
fn test_debug_shows_predicate_count() {
    let chain = full_name();
    assert_eq!(format!("{:?}", chain), "ValidatorChain { predicates: 2 }");
}

#[test]
fn test_chain_macro_trailing_comma() {
    let chain = chain![not_empty(),];
    assert_eq!(chain.len(), 1);
}

#[test]
fn test_chain_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ValidatorChain>();
}
