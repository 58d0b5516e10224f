pub mod export;
pub mod files;
pub mod init;
pub mod plan;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use repochunk::Config;

#[derive(Parser)]
#[command(name = "repochunk", about = "Export a repository's tracked files as fixed-size text parts.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a repochunk.toml with the default settings into the source root
    Init {
        #[command(flatten)]
        source: SourceArgs,

        /// Replace an existing repochunk.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Collect tracked files and write part_NNN.txt files
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        sizes: SizeArgs,
    },

    /// Show how many files, lines and parts an export would produce, without writing
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        sizes: SizeArgs,
    },

    /// Print the files an export would include, in export order
    Files {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory to leave out (default: from repochunk.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct SourceArgs {
    /// Repository root to export
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Args)]
pub struct SizeArgs {
    /// Lines per odd-numbered part (default: 225)
    #[arg(long = "odd")]
    pub odd_target: Option<usize>,

    /// Lines per even-numbered part (default: 180)
    #[arg(long = "even")]
    pub even_target: Option<usize>,

    /// Output directory (default: export)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SizeArgs {
    pub fn apply(&self, cfg: Config) -> Config {
        cfg.with_overrides(self.odd_target, self.even_target, self.output.clone())
    }
}
