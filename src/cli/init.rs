use anyhow::{Result, bail};
use std::path::Path;

use repochunk::Config;

pub fn run(root: &Path, force: bool) -> Result<()> {
    let path = Config::config_path(root);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default().save(root)?;
    println!("✓ Wrote {}", path.display());
    Ok(())
}
