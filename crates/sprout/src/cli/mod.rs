mod create;

pub use create::CreateCommand;

use std::ffi::OsString;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use sprout_core::ScaffoldError;

/// sprout - React component scaffolding
#[derive(Parser)]
#[command(name = "sprout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create files for a component with name <name>.
    Create(CreateCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Create(cmd) => cmd.execute(),
        }
    }
}

/// Rewrite the single-dash long flags (`-ts`, `-scss`) to their clap form.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-ts") => OsString::from("--isTs"),
            Some("-scss") => OsString::from("--isScss"),
            _ => arg,
        })
        .collect()
}

/// Print a failed command's error. A name conflict goes to stdout.
pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<ScaffoldError>() {
        Some(conflict @ ScaffoldError::ComponentExists { .. }) => println!("{}", conflict),
        _ => eprintln!("{} {:#}", style("Error:").red().bold(), err),
    }
}
