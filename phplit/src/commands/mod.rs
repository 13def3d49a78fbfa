mod completions;
mod dump;
mod format;
mod init;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use dump::DumpCommand;
use eyre::Result;
use format::FormatCommand;
use init::InitCommand;
use phplit_config::DumperSection;
use phplit_core::Indent;
use phplit_dumper::Dumper;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for phplit_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "phplit")]
#[command(version)]
#[command(about = "Render data as PHP literal expressions")]
pub(crate) struct Cli {
    /// Log what phplit is doing to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Dump(cmd) => cmd.run(),
            Commands::Format(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Dump a JSON or TOML document as a PHP expression
    Dump(DumpCommand),

    /// Fill a PHP statement template with JSON arguments
    Format(FormatCommand),

    /// Write a phplit.toml with the default settings
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Dumper settings shared by the rendering commands.
#[derive(Args)]
pub(crate) struct DumperArgs {
    /// Path to phplit.toml (used only if it exists)
    #[arg(short, long, default_value = phplit_config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Deepest array/object nesting allowed
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: Option<u32>,

    /// Line width to wrap long arrays at
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub wrap_length: Option<u32>,

    /// Indentation: "tab" or a number of spaces (1-8)
    #[arg(long)]
    pub indent: Option<Indent>,
}

impl DumperArgs {
    /// Build a dumper from the config file with command-line overrides.
    pub fn dumper(&self) -> Dumper {
        let mut config = phplit_config::load_or_default(&self.config).unwrap_or_exit();
        config.dumper.merge(DumperSection {
            max_depth: self.max_depth.map(|n| n as usize),
            wrap_length: self.wrap_length.map(|n| n as usize),
            indentation: self.indent,
            object_factory: None,
        });

        let config = config.dumper_config();
        tracing::debug!(?config, "resolved dumper settings");
        Dumper::new(config)
    }
}
