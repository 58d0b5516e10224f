use std::path::{Path, PathBuf};

use crate::chunking::{self, ChunkSizes, Partitioner};
use crate::collect::{self, Collected};
use crate::config::Config;
use crate::error::ExportError;
use crate::listing::FileLister;
use crate::writer::{ChunkSink, DirWriter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportReport {
    pub files: usize,
    pub unreadable: usize,
    pub lines: usize,
    pub parts: usize,
    pub output_root: PathBuf,
}

/// List, collect, partition and write. Unreadable files are skipped; any
/// other I/O failure stops the run, leaving already written parts in place.
pub fn run(cfg: &Config, root: &Path, lister: &dyn FileLister) -> Result<ExportReport, ExportError> {
    let sizes = cfg.sizes()?;
    let (files, collected) = gather(root, lister)?;

    let output_root = cfg.output_dir(root);
    let mut writer = DirWriter::create(&output_root)?;
    let parts = write_chunks(&collected.lines, sizes, &mut writer)?;

    let report = ExportReport {
        files,
        unreadable: collected.failures.len(),
        lines: collected.lines.len(),
        parts,
        output_root,
    };
    tracing::debug!(
        "Exported {} files ({} unreadable), {} lines into {} parts",
        report.files,
        report.unreadable,
        report.lines,
        report.parts
    );
    Ok(report)
}

/// Same as [`run`] but stops before touching the output directory.
pub fn plan(cfg: &Config, root: &Path, lister: &dyn FileLister) -> Result<ExportReport, ExportError> {
    let sizes = cfg.sizes()?;
    let (files, collected) = gather(root, lister)?;

    Ok(ExportReport {
        files,
        unreadable: collected.failures.len(),
        lines: collected.lines.len(),
        parts: chunking::plan_count(collected.lines.len(), sizes),
        output_root: cfg.output_dir(root),
    })
}

/// Feed each chunk to `sink` as soon as it is built. Returns the number written.
pub fn write_chunks(
    lines: &[String],
    sizes: ChunkSizes,
    sink: &mut dyn ChunkSink,
) -> Result<usize, ExportError> {
    let mut written = 0;
    for chunk in Partitioner::new(lines, sizes) {
        sink.write_chunk(&chunk)?;
        written += 1;
    }
    Ok(written)
}

fn gather(root: &Path, lister: &dyn FileLister) -> Result<(usize, Collected), ExportError> {
    let files = lister.list()?;
    tracing::debug!("Collecting {} files from {}", files.len(), root.display());
    let collected = collect::collect_lines(root, &files);
    Ok((files.len(), collected))
}
