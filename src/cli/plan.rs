use anyhow::Result;
use std::path::Path;

use repochunk::Config;
use repochunk::listing::GitLister;

pub fn run(cfg: &Config, root: &Path) -> Result<()> {
    let lister = GitLister::new(root, &cfg.output_root, &cfg.exclude);
    let report = repochunk::export::plan(cfg, root, &lister)?;

    println!("Files:       {} ({} unreadable)", report.files, report.unreadable);
    println!("Lines:       {}", report.lines);
    println!("Part sizes:  {} odd / {} even", cfg.odd_target, cfg.even_target);
    println!("Parts:       {}", report.parts);
    println!("Output:      {}", report.output_root.display());
    Ok(())
}
