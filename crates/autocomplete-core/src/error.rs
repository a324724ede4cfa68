use thiserror::Error;

use crate::term::LineDefect;

pub type Result<T> = std::result::Result<T, AutocompleteError>;

#[derive(Debug, Error)]
pub enum AutocompleteError {
    #[error("malformed term on line {line}: {defect}")]
    MalformedLine { line: usize, defect: LineDefect },

    #[error("header declares {declared} terms but {actual} lines follow it")]
    HeaderMismatch { declared: u64, actual: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AutocompleteError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "MALFORMED_LINE",
            Self::HeaderMismatch { .. } => "HEADER_MISMATCH",
            Self::InvalidHeader(_) => "INVALID_HEADER",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_per_variant() {
        let err = AutocompleteError::MalformedLine {
            line: 4,
            defect: LineDefect::MissingWeight,
        };
        assert_eq!(err.code(), "MALFORMED_LINE");
        assert_eq!(
            AutocompleteError::HeaderMismatch {
                declared: 3,
                actual: 2
            }
            .code(),
            "HEADER_MISMATCH"
        );
        assert_eq!(
            AutocompleteError::Validation("x".to_string()).code(),
            "VALIDATION_FAILED"
        );
    }

    #[test]
    fn malformed_line_message_names_line_and_defect() {
        let err = AutocompleteError::MalformedLine {
            line: 7,
            defect: LineDefect::MissingText,
        };
        assert_eq!(
            err.to_string(),
            "malformed term on line 7: missing term text"
        );
    }
}
