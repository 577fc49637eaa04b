use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::GlobalFlags;
pub use root_commands::{Commands, DiagramArgs, SchemaArgs, ShowArgs, ShowKind};

/// Top-level CLI parser for the `picto` binary.
#[derive(Debug, Parser)]
#[command(name = "picto", version, about = "Picto - photo-sharing schema toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
