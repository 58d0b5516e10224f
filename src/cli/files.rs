use anyhow::Result;
use std::path::Path;

use repochunk::Config;
use repochunk::listing::{FileLister, GitLister};

pub fn run(cfg: &Config, root: &Path) -> Result<()> {
    let lister = GitLister::new(root, &cfg.output_root, &cfg.exclude);
    for path in lister.list()? {
        println!("{path}");
    }
    Ok(())
}
