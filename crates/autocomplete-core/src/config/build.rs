use serde::Serialize;

use crate::error::{AutocompleteError, Result};

pub(super) const ENV_PARSE_POLICY: &str = "AUTOCOMPLETE_PARSE_POLICY";
pub(super) const ENV_HEADER_CHECK: &str = "AUTOCOMPLETE_HEADER_CHECK";

/// What the store builder does with a line that is not `<weight> <text>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsePolicy {
    /// Keep the line with weight `0` and/or empty text.
    #[default]
    DefaultZero,
    /// Drop the line and count it in the build report.
    Skip,
    /// Abort construction with `AutocompleteError::MalformedLine`.
    Reject,
}

impl ParsePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DefaultZero => "default-zero",
            Self::Skip => "skip",
            Self::Reject => "reject",
        }
    }

    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let normalized = raw.map(|value| value.trim().to_ascii_lowercase());
        match normalized.as_deref() {
            None => Ok(Self::DefaultZero),
            Some("default-zero" | "default_zero" | "default") => Ok(Self::DefaultZero),
            Some("skip") => Ok(Self::Skip),
            Some("reject") => Ok(Self::Reject),
            Some(other) => Err(AutocompleteError::Validation(format!(
                "invalid {ENV_PARSE_POLICY}: {other} (expected default-zero|skip|reject)"
            ))),
        }
    }
}

/// Whether the header line's declared count is compared with the input.
///
/// The header is skipped in every mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderCheck {
    #[default]
    Off,
    /// Record a warning in the build report.
    Warn,
    /// Fail construction.
    Strict,
}

impl HeaderCheck {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Strict => "strict",
        }
    }

    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let normalized = raw.map(|value| value.trim().to_ascii_lowercase());
        match normalized.as_deref() {
            None => Ok(Self::Off),
            Some("off" | "none" | "0" | "false") => Ok(Self::Off),
            Some("warn") => Ok(Self::Warn),
            Some("strict") => Ok(Self::Strict),
            Some(other) => Err(AutocompleteError::Validation(format!(
                "invalid {ENV_HEADER_CHECK}: {other} (expected off|warn|strict)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    pub parse_policy: ParsePolicy,
    pub header_check: HeaderCheck,
}

impl BuildOptions {
    pub(super) fn from_env() -> Result<Self> {
        Ok(Self {
            parse_policy: ParsePolicy::parse(std::env::var(ENV_PARSE_POLICY).ok().as_deref())?,
            header_check: HeaderCheck::parse(std::env::var(ENV_HEADER_CHECK).ok().as_deref())?,
        })
    }
}
