//! Line-delimited URL input

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Lazy reader over the non-empty, trimmed lines of a UTF-8 text file.
///
/// Blank lines are skipped silently. The sequence can only be restarted by
/// opening the file again.
pub struct InputReader {
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl InputReader {
    /// Open `path`, failing with [`Error::InputNotFound`] if it does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }
}

impl Iterator for InputReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            match line {
                Ok(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        return Some(Ok(trimmed.to_string()));
                    }
                }
                Err(source) => {
                    return Some(Err(Error::InputRead {
                        line: self.line_number,
                        source,
                    }));
                }
            }
        }
    }
}
