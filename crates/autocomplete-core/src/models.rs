use serde::Serialize;

use crate::term::{LineDefect, Term};

/// Non-fatal observation made while building a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// The input had no lines at all, so there was no header to skip.
    MissingHeader,
    /// The header does not start with an unsigned integer.
    HeaderUnreadable { header: String },
    HeaderMismatch { declared: u64, actual: usize },
    /// `line` is 1-based and counts the header.
    MalformedLine { line: usize, defect: LineDefect },
}

/// Summary of one store construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Raw lines seen, header included.
    pub lines_read: usize,
    pub terms_loaded: usize,
    /// Malformed lines kept with default weight/text.
    pub defaulted: usize,
    /// Malformed lines dropped.
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_count: Option<u64>,
    pub warnings: Vec<BuildWarning>,
}

/// One ranked match, shaped for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion<'a> {
    pub rank: usize,
    pub weight: u64,
    pub text: &'a str,
}

impl<'a> Suggestion<'a> {
    #[must_use]
    pub fn ranked(terms: &[&'a Term]) -> Vec<Self> {
        terms
            .iter()
            .enumerate()
            .map(|(idx, term)| Self {
                rank: idx + 1,
                weight: term.weight(),
                text: term.text(),
            })
            .collect()
    }
}
