use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{HeaderCheckArg, ParsePolicyArg, QueryArgs};

#[derive(Debug, Parser)]
#[command(name = "autocomplete")]
#[command(about = "Weighted prefix autocomplete over a term database", version)]
pub struct Cli {
    /// Term database: a count line followed by `<weight> <text>` lines.
    pub database: PathBuf,

    /// What to do with lines that are not `<weight> <text>`.
    #[arg(long, value_enum, global = true)]
    pub parse_policy: Option<ParsePolicyArg>,

    /// Compare the header's declared count with the number of term lines.
    #[arg(long, value_enum, global = true)]
    pub header_check: Option<HeaderCheckArg>,

    /// Maximum matches printed per query (`0` prints all).
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Print matches as JSON instead of `weight<TAB>text` lines.
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prompt for prefixes until `:q` or end of input (default).
    Repl,
    /// Print the matches for one prefix and exit.
    Query(QueryArgs),
    /// Print the database build report as JSON.
    Stats,
}
