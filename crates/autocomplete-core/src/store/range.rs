//! Boundary search for the prefix range over text-sorted terms.
//!
//! Both predicates are monotonic over byte-wise sorted texts:
//! - `before_range`: text cut to the prefix length sorts below the prefix;
//! - `after_range`: text and prefix, cut to the shorter of the two, differ with
//!   the text sorting above.
//!
//! Everything between the two partition points starts with the prefix.
use std::ops::Range;

use crate::term::Term;

pub(super) fn prefix_range(entries: &[Term], prefix: &str) -> Range<usize> {
    if prefix.is_empty() {
        return 0..entries.len();
    }
    let prefix = prefix.as_bytes();
    let lo = entries.partition_point(|term| before_range(term.text().as_bytes(), prefix));
    let hi = lo
        + entries[lo..].partition_point(|term| !after_range(term.text().as_bytes(), prefix));
    lo..hi
}

fn before_range(text: &[u8], prefix: &[u8]) -> bool {
    &text[..text.len().min(prefix.len())] < prefix
}

fn after_range(text: &[u8], prefix: &[u8]) -> bool {
    let shared = text.len().min(prefix.len());
    text[..shared] > prefix[..shared]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(texts: &[&str]) -> Vec<Term> {
        let mut terms: Vec<Term> = texts.iter().map(|text| Term::new(1, *text)).collect();
        terms.sort_by(|a, b| a.text().cmp(b.text()));
        terms
    }

    #[test]
    fn range_covers_exact_and_longer_matches() {
        let terms = sorted(&["c", "ca", "car", "care", "cat", "d"]);
        assert_eq!(prefix_range(&terms, "ca"), 1..5);
        assert_eq!(prefix_range(&terms, "car"), 2..4);
        assert_eq!(prefix_range(&terms, "care"), 3..4);
    }

    #[test]
    fn shorter_text_sharing_the_prefix_start_is_excluded() {
        let terms = sorted(&["ca", "cab"]);
        assert_eq!(prefix_range(&terms, "cab"), 1..2);
    }

    #[test]
    fn missing_prefix_yields_empty_range_at_insertion_point() {
        let terms = sorted(&["apple", "cat", "dog"]);
        let range = prefix_range(&terms, "b");
        assert!(range.is_empty());
        assert_eq!(range.start, 1);
        assert!(prefix_range(&terms, "zz").is_empty());
        assert!(prefix_range(&terms, "catalog").is_empty());
    }

    #[test]
    fn empty_prefix_spans_everything() {
        let terms = sorted(&["b", "a"]);
        assert_eq!(prefix_range(&terms, ""), 0..2);
        assert_eq!(prefix_range(&[], ""), 0..0);
    }

    #[test]
    fn empty_texts_sort_first_and_only_match_empty_prefix() {
        let terms = sorted(&["", "", "a"]);
        assert_eq!(prefix_range(&terms, "a"), 2..3);
        assert_eq!(prefix_range(&terms, ""), 0..3);
    }

    #[test]
    fn multibyte_prefix_matches_bytewise() {
        let terms = sorted(&["caf", "caf\u{e9}", "caf\u{e9}s", "cafe"]);
        let range = prefix_range(&terms, "caf\u{e9}");
        let found: Vec<&str> = terms[range].iter().map(Term::text).collect();
        assert_eq!(found, vec!["caf\u{e9}", "caf\u{e9}s"]);
    }
}
