use autocomplete_core::{HeaderCheck, ParsePolicy};
use clap::{Args, ValueEnum};

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Prefix to complete; may be empty.
    #[arg(allow_hyphen_values = true)]
    pub prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParsePolicyArg {
    DefaultZero,
    Skip,
    Reject,
}

impl From<ParsePolicyArg> for ParsePolicy {
    fn from(value: ParsePolicyArg) -> Self {
        match value {
            ParsePolicyArg::DefaultZero => Self::DefaultZero,
            ParsePolicyArg::Skip => Self::Skip,
            ParsePolicyArg::Reject => Self::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderCheckArg {
    Off,
    Warn,
    Strict,
}

impl From<HeaderCheckArg> for HeaderCheck {
    fn from(value: HeaderCheckArg) -> Self {
        match value {
            HeaderCheckArg::Off => Self::Off,
            HeaderCheckArg::Warn => Self::Warn,
            HeaderCheckArg::Strict => Self::Strict,
        }
    }
}
