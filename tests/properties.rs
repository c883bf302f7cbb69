//! Property-based tests over arbitrary, mostly malformed, embedded JSON.
//!
//! Inputs are drawn from an alphabet dense in JSON punctuation, quotes,
//! escapes and comment starts so that recovery paths are hit constantly.

use embedded_json::{parse, parse_with_limits, JsonMode, JsonTree, Limits, VirtualCharSequence};
use proptest::prelude::*;

const ALPHABET: &[char] = &[
    '[', ']', '{', '}', '(', ')', ':', ',', '"', '\'', '\\', '/', '*', ' ', '\n', '\r', '\t',
    '\u{00A0}', '\u{0001}', 'a', 'n', 'e', 'w', 't', 'r', 'u', 'l', 'f', 's', 'N', 'I', '0', '1',
    '9', 'x', '-', '.', 'E', '+', '$', '_',
];

fn json_ish(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(ALPHABET.to_vec()), 0..max_len)
        .prop_map(|chars| chars.into_iter().collect())
}

fn parse_both(input: &str) -> (JsonTree, JsonTree) {
    let chars = VirtualCharSequence::from_text(input);
    let strict = parse(&chars, JsonMode::Strict).unwrap();
    let loose = parse(&chars, JsonMode::Loose).unwrap();
    (strict, loose)
}

// ============================================================================
// Lossless coverage
// ============================================================================

#[test]
fn test_property_round_trip_coverage() {
    proptest!(|(input in json_ish(64))| {
        let (strict, loose) = parse_both(&input);
        for tree in [&strict, &loose] {
            prop_assert_eq!(tree.verify_coverage(), Ok(()));
            prop_assert_eq!(tree.to_text(), input.clone());
        }
    });
}

#[test]
fn test_property_round_trip_arbitrary_text() {
    proptest!(|(input in any::<String>())| {
        let chars = VirtualCharSequence::from_text(&input);
        let tree = parse_with_limits(&chars, JsonMode::Loose, Limits::lenient());
        if let Some(tree) = tree {
            prop_assert_eq!(tree.verify_coverage(), Ok(()));
            prop_assert_eq!(tree.to_text(), input);
        }
    });
}

#[test]
fn test_property_round_trip_with_offset() {
    proptest!(|(input in json_ish(48), offset in 0usize..10_000)| {
        let chars = VirtualCharSequence::from_text_at(&input, offset);
        for mode in JsonMode::ALL {
            let tree = parse(&chars, mode).unwrap();
            prop_assert_eq!(tree.verify_coverage(), Ok(()));
        }
    });
}

#[test]
fn test_property_truncation_robustness() {
    proptest!(|(input in json_ish(40))| {
        let chars: Vec<char> = input.chars().collect();
        for i in 0..=chars.len() {
            let prefix: String = chars[..i].iter().collect();
            let suffix: String = chars[i..].iter().collect();
            for part in [prefix, suffix] {
                let (strict, loose) = parse_both(&part);
                prop_assert_eq!(strict.verify_coverage(), Ok(()));
                prop_assert_eq!(loose.verify_coverage(), Ok(()));
            }
        }
    });
}

// ============================================================================
// Mode relationships
// ============================================================================

#[test]
fn test_property_mode_monotonicity() {
    proptest!(|(input in json_ish(64))| {
        let (strict, loose) = parse_both(&input);
        if strict.diagnostics().is_empty() {
            prop_assert!(loose.diagnostics().is_empty(), "{:?}", loose.diagnostics());
        }
        prop_assert!(loose.diagnostics().len() <= strict.diagnostics().len());
    });
}

#[test]
fn test_property_mode_independent_shape() {
    proptest!(|(input in json_ish(64))| {
        let (strict, loose) = parse_both(&input);
        prop_assert_eq!(strict.to_string(), loose.to_string());
    });
}

#[test]
fn test_property_valid_json_is_clean_in_strict() {
    proptest!(|(n in 0u32..1000, key in "[a-z]{1,8}", flag in any::<bool>())| {
        let input = format!("{{\"{}\": [{}, {}, null, \"s\"]}}", key, n, flag);
        let (strict, loose) = parse_both(&input);
        prop_assert!(strict.diagnostics().is_empty(), "{:?}", strict.diagnostics());
        prop_assert!(loose.diagnostics().is_empty());
    });
}

// ============================================================================
// Depth bound
// ============================================================================

#[test]
fn test_property_depth_bound() {
    proptest!(|(depth in 0usize..200, open in proptest::sample::select(vec!['[', '{']))| {
        let input: String = std::iter::repeat(open).take(depth).collect();
        let chars = VirtualCharSequence::from_text(&input);
        let limit = Limits::default().max_nesting_depth;
        for mode in JsonMode::ALL {
            let tree = parse(&chars, mode);
            prop_assert_eq!(tree.is_some(), depth <= limit);
        }
    });
}

#[test]
fn test_property_custom_depth_bound() {
    proptest!(|(depth in 0usize..40, limit in 0usize..40)| {
        let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
        let chars = VirtualCharSequence::from_text(&input);
        let tree = parse_with_limits(&chars, JsonMode::Strict, Limits::with_max_nesting_depth(limit));
        prop_assert_eq!(tree.is_some(), depth <= limit);
    });
}
