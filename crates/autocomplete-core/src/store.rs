use std::ops::Range;

use tracing::{debug, warn};

use crate::config::{BuildOptions, ParsePolicy};
use crate::error::{AutocompleteError, Result};
use crate::models::{BuildReport, BuildWarning};
use crate::term::{Term, scan_line};

mod header;
mod range;
mod rank;


/// Immutable, lexicographically sorted collection of terms.
///
/// Query results borrow from the store, so they cannot outlive it and the
/// store cannot change while they are held.
#[derive(Debug, Clone, Default)]
pub struct TermStore {
    entries: Vec<Term>,
    report: BuildReport,
}

impl TermStore {
    /// Builds a store from raw lines, skipping the first (header) line.
    ///
    /// Malformed lines are kept with weight `0` and/or empty text and the
    /// header is not checked. Use [`TermStore::build_with`] to change either.
    #[must_use]
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        let (store, fault) = Self::assemble(&lines, &BuildOptions::default());
        debug_assert!(fault.is_none(), "default build options never fail");
        store
    }

    pub fn build_with<I, S>(lines: I, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        match Self::assemble(&lines, options) {
            (_, Some(fault)) => Err(fault),
            (store, None) => Ok(store),
        }
    }

    /// Single construction path. A fault is only possible under
    /// `HeaderCheck::Strict` or `ParsePolicy::Reject`; the returned store is
    /// empty when one is reported.
    fn assemble<S: AsRef<str>>(
        lines: &[S],
        options: &BuildOptions,
    ) -> (Self, Option<AutocompleteError>) {
        let (header, body) = match lines.split_first() {
            Some((header, body)) => (Some(header.as_ref()), body),
            None => (None, &[][..]),
        };

        let mut report = BuildReport {
            lines_read: lines.len(),
            ..BuildReport::default()
        };
        if let Err(fault) = header::verify(header, body.len(), options.header_check, &mut report)
        {
            return (Self::default(), Some(fault));
        }

        let mut terms = Vec::with_capacity(body.len());
        for (offset, line) in body.iter().enumerate() {
            let line_no = offset + 2;
            let (term, defect) = scan_line(line.as_ref());
            let Some(defect) = defect else {
                terms.push(term);
                continue;
            };
            match options.parse_policy {
                ParsePolicy::DefaultZero => {
                    debug!(line = line_no, %defect, "keeping malformed term with defaults");
                    report.defaulted += 1;
                    terms.push(term);
                }
                ParsePolicy::Skip => {
                    warn!(line = line_no, %defect, "skipping malformed term");
                    report.skipped += 1;
                    report.warnings.push(BuildWarning::MalformedLine {
                        line: line_no,
                        defect,
                    });
                }
                ParsePolicy::Reject => {
                    let fault = AutocompleteError::MalformedLine {
                        line: line_no,
                        defect,
                    };
                    return (Self::default(), Some(fault));
                }
            }
        }

        (Self::from_terms(terms, report), None)
    }

    fn from_terms(mut entries: Vec<Term>, mut report: BuildReport) -> Self {
        entries.sort_by(|a, b| a.text().cmp(b.text()));
        report.terms_loaded = entries.len();
        debug!(
            lines = report.lines_read,
            terms = report.terms_loaded,
            defaulted = report.defaulted,
            skipped = report.skipped,
            "term store built"
        );
        Self { entries, report }
    }

    /// All terms in lexicographic order of their text.
    #[must_use]
    pub fn entries(&self) -> &[Term] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Half-open range of [`TermStore::entries`] whose text starts with `prefix`.
    #[must_use]
    pub fn prefix_range(&self, prefix: &str) -> Range<usize> {
        range::prefix_range(&self.entries, prefix)
    }

    #[must_use]
    pub fn count_matches(&self, prefix: &str) -> usize {
        self.prefix_range(prefix).len()
    }

    /// Terms starting with `prefix`, heaviest first.
    ///
    /// Equal weights keep lexicographic order, so the result is fully
    /// deterministic.
    #[must_use]
    pub fn matches(&self, prefix: &str) -> Vec<&Term> {
        let mut found: Vec<&Term> = self.entries[self.prefix_range(prefix)].iter().collect();
        found.sort_by(|a, b| rank::weight_ordering(a, b));
        found
    }

    /// Same order as [`TermStore::matches`], as positions in [`TermStore::entries`].
    #[must_use]
    pub fn match_indices(&self, prefix: &str) -> Vec<usize> {
        rank::ranked_indices(&self.entries, self.prefix_range(prefix))
    }

    #[must_use]
    pub fn top_matches(&self, prefix: &str, limit: usize) -> Vec<&Term> {
        let mut found = self.matches(prefix);
        found.truncate(limit);
        found
    }

    /// Owned copies of [`TermStore::matches`] for callers that outlive the store.
    #[must_use]
    pub fn matches_owned(&self, prefix: &str) -> Vec<Term> {
        self.matches(prefix).into_iter().cloned().collect()
    }
}
