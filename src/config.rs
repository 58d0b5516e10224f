use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chunking::ChunkSizes;
use crate::error::ExportError;

/// Name of the optional config file looked up in the source root.
pub const CONFIG_FILE: &str = "repochunk.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Lines per odd-indexed part (part_001, part_003, ...)
    #[serde(default = "default_odd_target")]
    pub odd_target: usize,

    /// Lines per even-indexed part (part_002, part_004, ...)
    #[serde(default = "default_even_target")]
    pub even_target: usize,

    /// Destination directory, relative to the source root unless absolute.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Extra tracked paths left out of the export. Everything under
    /// `output_root` is always left out.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

fn default_odd_target() -> usize {
    225
}

fn default_even_target() -> usize {
    180
}

fn default_output_root() -> PathBuf {
    PathBuf::from("export")
}

fn default_exclude() -> Vec<String> {
    vec!["export_repo.py".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odd_target: default_odd_target(),
            even_target: default_even_target(),
            output_root: default_output_root(),
            exclude: default_exclude(),
        }
    }
}

impl Config {
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load `repochunk.toml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = Self::config_path(root);
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        odd_target: Option<usize>,
        even_target: Option<usize>,
        output_root: Option<PathBuf>,
    ) -> Self {
        if let Some(n) = odd_target {
            self.odd_target = n;
        }
        if let Some(n) = even_target {
            self.even_target = n;
        }
        if let Some(dir) = output_root {
            self.output_root = dir;
        }
        self
    }

    pub fn sizes(&self) -> Result<ChunkSizes, ExportError> {
        ChunkSizes::new(self.odd_target, self.even_target)
    }

    /// Output directory resolved against the source root.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        if self.output_root.is_absolute() {
            self.output_root.clone()
        } else {
            root.join(&self.output_root)
        }
    }
}
