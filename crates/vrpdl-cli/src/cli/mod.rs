//! CLI for vrpdl, the VRP benchmark instance harvester.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use vrpdl_core::config::{self, FailurePolicy, VrpdlConfig};

use commands::{run_completions, run_fetch, run_list};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "vrpdl")]
#[command(about = "Download VRP benchmark instances and their solutions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to scrape from; overrides config.toml.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Host prefix that relative links are resolved against.
    #[arg(long, value_name = "URL")]
    pub source: Option<String>,

    /// Path of the listing page under the source URL.
    #[arg(long, value_name = "PATH")]
    pub page: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scrape the listing page and download every instance/solution pair.
    Fetch {
        #[command(flatten)]
        source: SourceArgs,

        /// Output root (default from config, "instances").
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Skip pairs that fail to download instead of stopping.
        #[arg(long)]
        keep_going: bool,
    },

    /// Scrape the listing page and print each pair with its destination, without downloading.
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl SourceArgs {
    fn apply(&self, cfg: &mut VrpdlConfig) {
        if let Some(source) = &self.source {
            cfg.source_url = source.clone();
        }
        if let Some(page) = &self.page {
            cfg.page_path = page.clone();
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(cfg)
    }
}

impl CliCommand {
    /// Applies command-line overrides to `cfg` and dispatches.
    pub fn run(self, mut cfg: VrpdlConfig) -> Result<()> {
        match self {
            CliCommand::Fetch {
                source,
                output_dir,
                keep_going,
            } => {
                source.apply(&mut cfg);
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                if keep_going {
                    cfg.failure_policy = FailurePolicy::Skip;
                }
                run_fetch(&cfg)
            }
            CliCommand::List { source } => {
                source.apply(&mut cfg);
                run_list(&cfg)
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }
    }
}

#[cfg(test)]
mod tests;
