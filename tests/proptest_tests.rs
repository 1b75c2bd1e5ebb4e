//! Property-based tests for the CUI validator.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "validator")]

use cuival::validator::validate_cui;
use proptest::prelude::*;

const CHECKSUM_KEY: [u32; 9] = [7, 5, 3, 2, 1, 7, 5, 3, 2];

/// Compute the control digit for a CUI body (the digits before the control
/// digit), per the official algorithm.
fn control_digit(body: &str) -> u32 {
    let padded = format!("{body:0>9}");
    let sum: u32 = padded
        .bytes()
        .zip(CHECKSUM_KEY)
        .map(|(d, key)| u32::from(d - b'0') * key)
        .sum();
    let remainder = (sum * 10) % 11;
    if remainder == 10 { 0 } else { remainder }
}

/// Strategy: a CUI body of 1 to 9 digits, digits only, leading zeros allowed.
fn cui_body() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, 1..=9)
        .prop_map(|digits| digits.into_iter().map(|d| (b'0' + d) as char).collect())
}

/// Strategy: a fully valid CUI (body plus computed control digit).
fn valid_cui() -> impl Strategy<Value = String> {
    cui_body().prop_map(|body| {
        let control = control_digit(&body);
        format!("{body}{control}")
    })
}

proptest! {
    #[test]
    fn generated_valid_cuis_accept(cui in valid_cui()) {
        let r = validate_cui(&cui);
        prop_assert!(r.valid, "{cui}: {:?}", r.error);
        prop_assert_eq!(r.normalized.as_deref(), Some(cui.as_str()));
        prop_assert!(!r.vat_prefix_present);
    }

    #[test]
    fn ro_prefix_accepts_and_is_recorded(cui in valid_cui(), upper in any::<bool>()) {
        let input = if upper { format!("RO{cui}") } else { format!("ro{cui}") };
        let r = validate_cui(&input);
        prop_assert!(r.valid, "{input}: {:?}", r.error);
        prop_assert_eq!(r.normalized.as_deref(), Some(cui.as_str()));
        prop_assert!(r.vat_prefix_present);
    }

    #[test]
    fn separator_interleaving_normalizes(
        cui in valid_cui(),
        seps in proptest::collection::vec(proptest::sample::select(vec![' ', '-', '_', '.', '/']), 1..10),
    ) {
        // Interleave separators between digits, cycling through the sample
        let mut decorated = String::new();
        for (i, c) in cui.chars().enumerate() {
            decorated.push(c);
            decorated.push(seps[i % seps.len()]);
        }
        let r = validate_cui(&decorated);
        prop_assert!(r.valid, "{decorated}: {:?}", r.error);
        prop_assert_eq!(r.normalized.as_deref(), Some(cui.as_str()));
    }

    #[test]
    fn mutated_control_digit_rejects(body in cui_body(), offset in 1u32..10) {
        let control = control_digit(&body);
        let wrong = (control + offset) % 10;
        prop_assume!(wrong != control);
        let cui = format!("{body}{wrong}");
        let r = validate_cui(&cui);
        prop_assert!(!r.valid, "{cui}");
        prop_assert!(r.error.unwrap().contains("checksum"));
    }

    #[test]
    fn never_panics_on_arbitrary_input(input in ".*") {
        let _ = validate_cui(&input);
    }
}
