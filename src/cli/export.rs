use anyhow::{Context, Result};
use std::path::Path;

use repochunk::Config;
use repochunk::listing::GitLister;

pub fn run(cfg: &Config, root: &Path) -> Result<()> {
    let lister = GitLister::new(root, &cfg.output_root, &cfg.exclude);
    let report = repochunk::export::run(cfg, root, &lister)
        .with_context(|| format!("Export of {} failed", root.display()))?;

    if report.unreadable > 0 {
        eprintln!("  {} of {} files could not be read (see warnings above)", report.unreadable, report.files);
    }
    println!(
        "✓ Export complete: {} parts written to {}",
        report.parts,
        report.output_root.display()
    );
    Ok(())
}
