//! String Validation Example
//!
//! Builds a few validator chains and prints every reason an input is rejected.
//!
//! Run with: cargo run --example string_validation

use checklist::predicate::*;
use checklist::{chain, Semigroup, ValidatorChain, Verdict};

fn main() {
    println!("=== String Validation Example ===\n");

    single_predicates();
    full_name_chain();
    custom_rules();
    parse_dont_validate();
}

/// Stock predicates on their own
fn single_predicates() {
    println!("--- Single Predicates ---\n");

    for input in ["hello", "   ", "Hello", "a b c"] {
        println!("{:?}", input);
        println!("  not_empty:           {:?}", not_empty().evaluate(input));
        println!("  starts_with_capital: {:?}", starts_with_capital().evaluate(input));
        println!("  has_single_space:    {:?}", has_single_space().evaluate(input));
    }
    println!();
}

/// Every failure is reported, not just the first
fn full_name_chain() {
    println!("--- Full Name Chain ---\n");

    let full_name = chain![starts_with_capital(), has_single_space()];

    for input in ["Hel lo", "hello", "Hello", "hel lo"] {
        let result = full_name.evaluate(input);
        println!("{:>8?} -> passed={} reasons={:?}", input, result.passed(), result.reasons());
    }
    println!();
}

fn no_digits(input: &str) -> Verdict {
    Verdict::check(!input.chars().any(|c| c.is_ascii_digit()), "contains digits")
}

/// Custom predicates next to the stock ones, and merging results
fn custom_rules() {
    println!("--- Custom Rules ---\n");

    let mut username = ValidatorChain::new(not_empty());
    username
        .add_predicate(no_digits)
        .add_predicate(rule(|s: &str| s.len() <= 12, "is too long"));

    let shape = chain![starts_with_capital()];

    let input = "r2d2 the astromech";
    let merged = username.evaluate(input).combine(shape.evaluate(input));
    println!("{:?}: {}", input, merged);
    println!();
}

/// Keep the validated value instead of a bare boolean
fn parse_dont_validate() {
    println!("--- Parse, Don't Validate ---\n");

    let full_name = chain![starts_with_capital(), has_single_space()];

    match full_name.parse("Ada Lovelace") {
        Ok(name) => println!("Welcome, {}", name),
        Err(result) => println!("Rejected: {}", result),
    }

    match full_name.parse("ada") {
        Ok(name) => println!("Welcome, {}", name),
        Err(result) => println!("Rejected: {}", result),
    }
}
