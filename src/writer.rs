use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::chunking::Chunk;
use crate::error::ExportError;

/// Destination for finished chunks, in index order.
pub trait ChunkSink {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<PathBuf, ExportError>;
}

/// Writes each chunk to `<root>/part_NNN.txt`, replacing any existing file.
pub struct DirWriter {
    root: PathBuf,
}

impl DirWriter {
    /// Create `root` and its parents if needed. Existing directories are fine.
    pub fn create(root: &Path) -> Result<Self, ExportError> {
        std::fs::create_dir_all(root).map_err(|source| ExportError::CreateOutputDir {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl ChunkSink for DirWriter {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<PathBuf, ExportError> {
        let path = self.root.join(chunk.file_name());
        let write = |path: &Path| -> std::io::Result<()> {
            let mut out = BufWriter::new(File::create(path)?);
            for line in &chunk.lines {
                out.write_all(line.as_bytes())?;
            }
            out.flush()
        };
        write(&path).map_err(|source| ExportError::WriteChunk {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            "Wrote {} ({} lines, {} padding)",
            path.display(),
            chunk.lines.len(),
            chunk.padding
        );
        Ok(path)
    }
}
