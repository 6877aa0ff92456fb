//! Options for configuring a listing pass

use std::path::PathBuf;

/// Options for a single listing pass over a directory tree
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Root directory to traverse
    pub root: PathBuf,

    /// Include glob patterns; an empty list matches every file
    pub filters: Vec<String>,

    /// Root-relative directory paths pruned from traversal.
    ///
    /// Matched exactly against each directory's relative path, never as
    /// globs. A leading path separator is tolerated and stripped.
    pub excludes: Vec<String>,
}

impl ListOptions {
    /// Create options for the given root with no filters or excludes
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Add an include filter
    pub fn with_filter(mut self, pattern: impl Into<String>) -> Self {
        self.filters.push(pattern.into());
        self
    }

    /// Add multiple include filters
    pub fn with_filters(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.filters.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add an excluded directory
    pub fn with_exclude(mut self, path: impl Into<String>) -> Self {
        self.excludes.push(path.into());
        self
    }

    /// Add multiple excluded directories
    pub fn with_excludes(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes.extend(paths.into_iter().map(Into::into));
        self
    }
}
