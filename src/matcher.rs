//! Include-filter matching
//!
//! Filters are shell-style globs matched against a file's root-relative path
//! (leading separator included, e.g. `/sub/c.txt`).

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::types::Result;

/// A compiled set of include filters.
///
/// An empty set matches everything. A file matches a non-empty set if any
/// single filter matches it; matching short-circuits on the first hit.
#[derive(Debug, Clone)]
pub struct FilterSet {
    set: Option<GlobSet>,
}

impl FilterSet {
    /// Compile filter patterns into a matcher.
    ///
    /// Patterns use shell wildcard syntax (`*`, `?`, `[seq]`, `[!seq]`);
    /// wildcards may span path separators. A pattern the glob compiler
    /// rejects falls back to matching its text literally instead of failing
    /// the whole listing.
    pub fn new(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { set: None });
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = match Glob::new(pattern) {
                Ok(glob) => glob,
                Err(err) => {
                    log::debug!("filter {:?} is not a valid glob ({}); matching it literally", pattern, err);
                    Glob::new(&globset::escape(pattern))?
                }
            };
            builder.add(glob);
        }

        Ok(Self {
            set: Some(builder.build()?),
        })
    }

    /// True when `path` matches any filter, or when the set is empty
    pub fn is_match(&self, path: &str) -> bool {
        match &self.set {
            Some(set) => set.is_match(path),
            None => true,
        }
    }

    /// True when no patterns were supplied
    pub fn is_empty(&self) -> bool {
        self.set.is_none()
    }
}
