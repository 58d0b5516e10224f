mod cli;

use clap::Parser;
use cli::{Cli, Command};
use repochunk::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repochunk=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Init { source, force } => cli::init::run(&source.root, force),
        Command::Export { source, sizes } => {
            let cfg = sizes.apply(Config::load(&source.root)?);
            cli::export::run(&cfg, &source.root)
        }
        Command::Plan { source, sizes } => {
            let cfg = sizes.apply(Config::load(&source.root)?);
            cli::plan::run(&cfg, &source.root)
        }
        Command::Files { source, output } => {
            let cfg = Config::load(&source.root)?.with_overrides(None, None, output);
            cli::files::run(&cfg, &source.root)
        }
    }
}
