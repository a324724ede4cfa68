use tracing::warn;

use crate::config::HeaderCheck;
use crate::error::{AutocompleteError, Result};
use crate::models::{BuildReport, BuildWarning};
use crate::term::{LineDefect, scan_line};

/// Leading unsigned integer of the header line, if it has one.
pub(super) fn declared_count(header: &str) -> Option<u64> {
    match scan_line(header) {
        (_, Some(LineDefect::MissingWeight | LineDefect::WeightOverflow)) => None,
        (term, _) => Some(term.weight()),
    }
}

pub(super) fn verify(
    header: Option<&str>,
    body_len: usize,
    mode: HeaderCheck,
    report: &mut BuildReport,
) -> Result<()> {
    report.declared_count = header.and_then(declared_count);
    if mode == HeaderCheck::Off {
        return Ok(());
    }

    let Some(warning) = inspect(header, report.declared_count, body_len) else {
        return Ok(());
    };
    if mode == HeaderCheck::Strict {
        return Err(into_error(warning));
    }

    warn!(?warning, "header does not describe the term lines");
    report.warnings.push(warning);
    Ok(())
}

fn inspect(header: Option<&str>, declared: Option<u64>, body_len: usize) -> Option<BuildWarning> {
    let Some(header) = header else {
        return Some(BuildWarning::MissingHeader);
    };
    let Some(declared) = declared else {
        return Some(BuildWarning::HeaderUnreadable {
            header: header.trim().to_string(),
        });
    };
    if usize::try_from(declared).ok() == Some(body_len) {
        return None;
    }
    Some(BuildWarning::HeaderMismatch {
        declared,
        actual: body_len,
    })
}

fn into_error(warning: BuildWarning) -> AutocompleteError {
    match warning {
        BuildWarning::MissingHeader => {
            AutocompleteError::InvalidHeader("input has no header line".to_string())
        }
        BuildWarning::HeaderUnreadable { header } => {
            AutocompleteError::InvalidHeader(format!("expected an entry count, got {header:?}"))
        }
        BuildWarning::HeaderMismatch { declared, actual } => {
            AutocompleteError::HeaderMismatch { declared, actual }
        }
        BuildWarning::MalformedLine { line, defect } => {
            AutocompleteError::MalformedLine { line, defect }
        }
    }
}
