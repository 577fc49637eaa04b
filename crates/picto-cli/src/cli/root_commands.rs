use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render the ER diagram of the Picto schema.
    Diagram(DiagramArgs),
    /// Print a JSON Schema, or list the available names.
    Schema(SchemaArgs),
    /// Print the to_dict view of a stored user, post, or comment.
    Show(ShowArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DiagramArgs {
    /// Output file; the extension picks the format (.png, .svg, .pdf, .jpg, .dot, .mmd).
    /// Defaults to `diagram.output` from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `user`, `post_dict`). Lists all names when omitted.
    pub name: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ShowKind {
    User,
    Post,
    Comment,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub kind: ShowKind,
    pub id: i64,
}
