use std::io::{BufRead, Write};

use anyhow::Result;
use autocomplete_core::TermStore;
use autocomplete_core::loader::read_next_line;

use super::support::{OutputMode, select_matches, write_matches};

const PROMPT: &str = "prefix> ";
const QUIT_COMMANDS: [&str; 3] = [":q", ":quit", ":exit"];

/// Answers one prefix per input line until a quit command or end of input.
///
/// The line terminator is the only thing stripped, so leading spaces are part
/// of the prefix and an empty line lists the heaviest terms. Input that is not
/// valid UTF-8 is decoded lossily rather than ending the session. The prompt is
/// omitted in JSON mode to keep the output machine-readable.
pub(super) fn run_repl<R: BufRead, W: Write>(
    store: &TermStore,
    limit: Option<usize>,
    mode: OutputMode,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        if mode == OutputMode::Text {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        let Some(prefix) = read_next_line(&mut input, &mut buf)? else {
            break;
        };
        if QUIT_COMMANDS.contains(&prefix.as_str()) {
            break;
        }

        let found = select_matches(store, &prefix, limit);
        write_matches(&mut out, &found, mode)?;
    }

    if mode == OutputMode::Text {
        writeln!(out)?;
    }
    Ok(())
}
