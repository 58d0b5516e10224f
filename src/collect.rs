//! Flatten source files into one line sequence.
//!
//! Each file contributes a `-- <path> --` header, its lines, and one blank
//! separator line. A file that cannot be read keeps its header and separator
//! and is reported instead of aborting the run.

use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub struct ReadFailure {
    pub path: String,
    pub cause: std::io::Error,
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading {}: {}", self.path, self.cause)
    }
}

/// The materialized line sequence plus the files that could not be read.
#[derive(Debug, Default)]
pub struct Collected {
    pub lines: Vec<String>,
    pub failures: Vec<ReadFailure>,
}

pub fn header_line(path: &str) -> String {
    format!("-- {path} --\n")
}

/// Read one file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_source(root: &Path, path: &str) -> Result<String, ReadFailure> {
    std::fs::read(root.join(path))
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .map_err(|cause| ReadFailure {
            path: path.to_string(),
            cause,
        })
}

/// Split text into lines that each end with exactly one `\n`.
/// `\r\n` and bare `\r` count as line breaks too.
pub fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(format!("{line}\n"))
            }
            None => {
                let line = rest;
                rest = "";
                Some(format!("{line}\n"))
            }
        }
    })
}

/// Build the line sequence for `files`, in the order given.
pub fn collect_lines(root: &Path, files: &[String]) -> Collected {
    let mut collected = Collected::default();

    for path in files {
        collected.lines.push(header_line(path));

        match read_source(root, path) {
            Ok(text) => collected.lines.extend(split_lines(&text)),
            Err(failure) => {
                tracing::warn!("{}", failure);
                collected.failures.push(failure);
            }
        }

        collected.lines.push("\n".to_string());
    }

    collected
}
