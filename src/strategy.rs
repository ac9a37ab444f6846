use crate::counts::WordCounts;
use crate::error::{Result, WordCountError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read buffer used when opening input files
pub const READ_BUFFER_SIZE: usize = 128 * 1024;

/// An execution strategy for turning lines of text into word counts
pub trait CountStrategy: Send + Sync {
    /// Count every line produced by `reader`
    fn count_reader(&self, reader: &mut dyn BufRead) -> Result<WordCounts>;

    /// Open `path` and count its contents.
    ///
    /// Open and read failures both carry the path.
    fn count_file(&self, path: &Path) -> Result<WordCounts> {
        let file = File::open(path).map_err(|source| WordCountError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
        self.count_reader(&mut reader).map_err(|e| e.at_path(path))
    }

    /// Short label used in timing output
    fn name(&self) -> &str;
}

/// Read the next line into `buf` without its trailing `\n`.
///
/// Returns `false` at end of input. Bytes need not be valid UTF-8.
pub fn next_line(reader: &mut dyn BufRead, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(true)
}

/// Materialize every line of `reader` in order
pub fn read_lines(reader: &mut dyn BufRead) -> io::Result<Vec<Vec<u8>>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    while next_line(reader, &mut buf)? {
        lines.push(std::mem::take(&mut buf));
    }
    Ok(lines)
}
