//! Line-delimited UTF-8 file handling.

use std::fs;
use std::path::Path;

use crate::Result;

/// Reads a file into one string per line.
///
/// Only the trailing `\n` is stripped; a `\r` before it is data and stays. A
/// final newline does not produce a trailing empty line.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    if text.ends_with('\n') {
        lines.pop();
    }
    Ok(lines)
}

/// Writes one line per entry, each terminated by `\n`.
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}
