use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::BuildOptions;
use crate::error::Result;
use crate::store::TermStore;

/// Reads every line of a term database, header included.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the load,
/// so one badly encoded line only degrades that line.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    read_lines_from(BufReader::new(File::open(path)?))
}

pub fn read_lines_from(mut reader: impl BufRead) -> Result<Vec<String>> {
    let mut buf = Vec::new();
    let mut lines = Vec::new();
    while let Some(line) = read_next_line(&mut reader, &mut buf)? {
        lines.push(line);
    }
    Ok(lines)
}

/// Reads one `\n`-terminated line, dropping the terminator and a `\r` before
/// it. Returns `None` at end of input.
pub fn read_next_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

impl TermStore {
    pub fn from_path(path: &Path, options: &BuildOptions) -> Result<Self> {
        Self::build_with(read_lines(path)?, options)
    }
}
