//! # globls
//!
//! List files in a directory tree, filtering by glob patterns.
//!
//! Given a root directory, a set of include globs, and a set of excluded
//! subdirectories, `globls` walks the tree and produces the root-relative
//! paths of every matching regular file. Matching is streaming: paths are
//! yielded as the walk discovers them, in whatever order the filesystem
//! returns entries.
//!
//! Do **not** use this crate to pull in sources for build targets. Globbing
//! inputs plays badly with version control leaving untracked files around;
//! it is only suitable where a false positive causes at most a spurious
//! re-run, such as the input section of an action step.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use globls::{ListOptions, list_files};
//!
//! let options = ListOptions::new("src")
//!     .with_filter("*.rs")
//!     .with_exclude("target");
//!
//! for path in list_files(&options)? {
//!     println!("{}", path);
//! }
//! # Ok::<(), globls::GloblsError>(())
//! ```
//!
//! ## Semantics
//!
//! - A root that does not exist yields an empty listing, not an error.
//! - Filters use shell wildcard syntax (`*`, `?`, `[seq]`, `[!seq]`) and are
//!   matched against the leading-separator relative path (e.g. `/sub/c.txt`);
//!   an empty filter set matches every file.
//! - Excludes are exact relative directory paths, never globs. An excluded
//!   directory is pruned before descent, so its contents are never read.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matcher;
pub mod types;
pub mod walk;

// Re-export main types and functions
pub use matcher::FilterSet;
pub use types::{GloblsError, ListOptions, Result};
pub use walk::{FileWalk, list_files};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
