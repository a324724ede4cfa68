//! One suggestable entry and the line format it is read from.
//!
//! A term line is `<weight> <text>`: optional leading whitespace, an unsigned
//! integer, whitespace, then a single token. Anything after the first token is
//! ignored. Only ASCII whitespace separates fields.
use serde::Serialize;
use thiserror::Error;

/// What made a raw line fall short of the `<weight> <text>` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDefect {
    #[error("missing numeric weight")]
    MissingWeight,
    #[error("weight does not fit in 64 bits")]
    WeightOverflow,
    #[error("missing term text")]
    MissingText,
}

/// Immutable `(weight, text)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    weight: u64,
    text: String,
}

impl Term {
    #[must_use]
    pub fn new(weight: u64, text: impl Into<String>) -> Self {
        Self {
            weight,
            text: text.into(),
        }
    }

    /// Lenient parse: never fails.
    ///
    /// A line without leading digits yields weight `0` and empty text, the same
    /// way a failed stream extraction leaves every later field unread. A weight
    /// too large for `u64` saturates and also leaves the text empty.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        scan_line(line).0
    }

    /// Strict parse: reports the first defect instead of defaulting.
    pub fn try_parse(line: &str) -> Result<Self, LineDefect> {
        match scan_line(line) {
            (term, None) => Ok(term),
            (_, Some(defect)) => Err(defect),
        }
    }

    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Returns the best-effort term together with the defect that degraded it.
pub(crate) fn scan_line(line: &str) -> (Term, Option<LineDefect>) {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return (Term::new(0, ""), Some(LineDefect::MissingWeight));
    }

    let (digits, rest) = rest.split_at(digits_len);
    let Ok(weight) = digits.parse::<u64>() else {
        return (Term::new(u64::MAX, ""), Some(LineDefect::WeightOverflow));
    };

    match rest.split_ascii_whitespace().next() {
        Some(text) => (Term::new(weight, text), None),
        None => (Term::new(weight, ""), Some(LineDefect::MissingText)),
    }
}
