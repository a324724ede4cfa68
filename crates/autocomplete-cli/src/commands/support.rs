use std::io::{self, Write};

use anyhow::Result;
use autocomplete_core::{StoreConfig, Suggestion, Term, TermStore};

use crate::cli::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub(super) const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Command-line flags win over environment values.
pub(super) fn apply_overrides(mut config: StoreConfig, cli: &Cli) -> StoreConfig {
    if let Some(policy) = cli.parse_policy {
        config.build.parse_policy = policy.into();
    }
    if let Some(check) = cli.header_check {
        config.build.header_check = check.into();
    }
    if let Some(limit) = cli.limit {
        config.result_limit = limit;
    }
    config
}

pub(super) fn select_matches<'a>(
    store: &'a TermStore,
    prefix: &str,
    limit: Option<usize>,
) -> Vec<&'a Term> {
    match limit {
        Some(limit) => store.top_matches(prefix, limit),
        None => store.matches(prefix),
    }
}

pub(super) fn write_matches(out: &mut impl Write, found: &[&Term], mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Json => {
            serde_json::to_writer(&mut *out, &Suggestion::ranked(found))?;
            writeln!(out)?;
        }
        OutputMode::Text if found.is_empty() => {
            writeln!(out, "(no matches)")?;
        }
        OutputMode::Text => {
            for term in found {
                writeln!(out, "{}\t{}", term.weight(), term.text())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
