//! CLI entry point — argument parsing and the listing loop

mod args;

use std::io::Write;

use args::Args;
use clap::Parser;
use globls::{FileWalk, ListOptions};

/// Main CLI entry point — parse args, walk the tree, print matches
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let options = ListOptions::new(args.root)
        .with_filters(args.filter)
        .with_excludes(args.exclude);

    let walk = FileWalk::new(&options)?;

    // Paths stream out as the walk produces them, so anything already
    // printed survives a mid-traversal failure.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in walk {
        writeln!(out, "{}", path?)?;
    }

    Ok(())
}
