//! Line source
//!
//! Loads an input file into an ordered sequence of [`Line`]s. Each line keeps
//! the position it had in the file so executors that finish out of order can
//! still be traced back to the original record.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{BenchError, BenchResult};

/// One record of the input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based position in the source file
    pub index: usize,
    /// Line text without its terminator
    pub content: String,
}

impl Line {
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }
}

/// Read every line of `path` in file order.
///
/// `\n` and `\r\n` terminators are stripped, nothing else is touched. Any
/// failure (open or mid-stream) discards what was read so far and returns
/// [`BenchError::Io`].
pub fn load_lines(path: &Path) -> BenchResult<Vec<Line>> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let content = line.map_err(|e| BenchError::io(path, e))?;
        lines.push(Line { index, content });
    }

    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Build lines from in-memory text, numbering them from 0.
pub fn from_strings<I, S>(items: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, content)| Line::new(index, content))
        .collect()
}
