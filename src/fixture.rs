//! Throwaway input files for benchmark runs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{BenchError, BenchResult};

/// Text of fixture line `number` (1-based)
pub fn fixture_line(number: usize) -> String {
    format!("Line {number} of the test file with content for intensive processing")
}

/// Create or truncate `path` and fill it with `count` numbered lines.
pub fn write_test_file(path: &Path, count: usize) -> BenchResult<()> {
    let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for number in 1..=count {
        writeln!(writer, "{}", fixture_line(number)).map_err(|e| BenchError::io(path, e))?;
    }
    writer.flush().map_err(|e| BenchError::io(path, e))?;

    debug!("Wrote {} fixture lines to {}", count, path.display());
    Ok(())
}
