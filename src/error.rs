use std::path::PathBuf;

/// Errors that abort an export run.
///
/// Unreadable source files are not in here: they are recovered per file by
/// the collector and reported as [`crate::collect::ReadFailure`] values.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("{which} chunk target of {value} lines is outside 1..={max}")]
    InvalidTarget {
        which: &'static str,
        value: usize,
        max: usize,
    },

    #[error("failed to run git in {}", root.display())]
    GitSpawn {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list tracked files in {}: {reason}", root.display())]
    ListFiles { root: PathBuf, reason: String },

    #[error("failed to create output directory {}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteChunk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
