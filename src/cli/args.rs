//! CLI argument definitions for globls

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "globls")]
#[command(about = "List files in a directory tree, filtering by glob patterns", long_about = None)]
#[command(version)]
pub(crate) struct Args {
    /// Root directory to traverse
    #[arg(long)]
    pub(crate) root: PathBuf,

    /// Include glob pattern; a file is listed if any filter matches (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub(crate) filter: Vec<String>,

    /// Root-relative directory to prune from traversal, matched exactly (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub(crate) exclude: Vec<String>,
}
