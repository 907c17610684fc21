use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Build the structural index of files or directories.
    Index(IndexArgs),
    /// Print the JSON Schema of the structural model.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct IndexArgs {
    /// Source files or directories to index.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Index files one at a time instead of on the thread pool.
    #[arg(long)]
    pub sequential: bool,
}
