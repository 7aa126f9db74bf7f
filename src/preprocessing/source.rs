//! Where sample lines come from.
//!
//! The loader only needs something it can open for buffered reading and a
//! name to put into error messages. Files are the normal case; in-memory
//! text is handy for tests and for callers that already hold the data.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// A readable origin of one-value-per-line sample text.
///
/// Each call to [`SampleSource::open`] yields a fresh reader positioned at
/// the start of the data. The reader is released when dropped.
#[cfg_attr(test, mockall::automock)]
pub trait SampleSource {
    /// Human readable name used in error locations.
    fn name(&self) -> String;
    fn open(&self) -> io::Result<Box<dyn BufRead>>;
}

/// Samples stored in a text file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SampleSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Samples held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    text: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Joins `lines` with newlines, one sample per entry.
    pub fn from_lines<S: AsRef<str>>(name: impl Into<String>, lines: &[S]) -> Self {
        let text = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(name, text)
    }
}

impl SampleSource for MemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(Box::new(Cursor::new(self.text.clone().into_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_reads_contents() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"812\n799\n").unwrap();
        let source = FileSource::new(temp.path());
        let mut contents = String::new();
        source.open().unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "812\n799\n");
        assert_eq!(source.name(), temp.path().display().to_string());
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/nonexistent/rr_intervals.txt");
        assert!(source.open().is_err());
    }

    #[test]
    fn test_memory_source_from_lines() {
        let source = MemorySource::from_lines("mem", &["1000", "1020"]);
        let lines = source
            .open()
            .unwrap()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines, vec!["1000", "1020"]);
        assert_eq!(source.name(), "mem");
    }
}
