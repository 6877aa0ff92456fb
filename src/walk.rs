//! Directory traversal
//!
//! Pre-order walk of the root's subtree. Excluded directories are pruned
//! before descent, so their contents are never read. Matching files are
//! emitted root-relative with a leading separator, in whatever order the
//! filesystem returns entries; no sorting is imposed.

use std::collections::HashSet;
use std::path::{MAIN_SEPARATOR, PathBuf};

use walkdir::WalkDir;

use crate::matcher::FilterSet;
use crate::types::{ListOptions, Result};

/// Lazy iterator over matching root-relative file paths.
///
/// Yields `Ok(path)` for each matching regular file in traversal order.
/// Filesystem failures (unreadable directory, vanished entry) surface as
/// `Err` items; there is no retry and nothing already yielded is taken back.
pub struct FileWalk {
    root: PathBuf,
    filters: FilterSet,
    excludes: HashSet<String>,
    inner: Option<walkdir::IntoIter>,
}

impl FileWalk {
    /// Start the traversal described by `options`.
    ///
    /// A root that does not exist (or is not a directory) produces an empty,
    /// successful iterator. Filter compilation problems are reported here,
    /// not during iteration.
    pub fn new(options: &ListOptions) -> Result<Self> {
        let filters = FilterSet::new(&options.filters)?;
        if filters.is_empty() {
            log::debug!("no filters given, every file matches");
        }

        let excludes: HashSet<String> = options
            .excludes
            .iter()
            .map(|path| path.trim_start_matches(MAIN_SEPARATOR).to_string())
            .collect();

        let inner = if options.root.is_dir() {
            Some(WalkDir::new(&options.root).into_iter())
        } else {
            log::debug!("root {} is not a directory, nothing to list", options.root.display());
            None
        };

        Ok(Self {
            root: options.root.clone(),
            filters,
            excludes,
            inner,
        })
    }

}

impl Iterator for FileWalk {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let walker = self.inner.as_mut()?;
        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            // The root itself is yielded at depth 0; it is neither listable
            // nor excludable.
            if entry.depth() == 0 {
                continue;
            }

            // Entries always live under root; fall back to the full path
            // rather than panic if the prefix ever fails to strip.
            let rel = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());

            if entry.file_type().is_dir() {
                let rel_str = rel.to_string_lossy();
                if self.excludes.contains(rel_str.as_ref()) {
                    log::debug!("pruning {}{}", MAIN_SEPARATOR, rel_str);
                    walker.skip_current_dir();
                }
                continue;
            }

            // Only regular files are listed; symlinks and other special
            // entries are skipped.
            if !entry.file_type().is_file() {
                continue;
            }

            let rel_path = format!("{}{}", MAIN_SEPARATOR, rel.display());
            if self.filters.is_match(&rel_path) {
                return Some(Ok(rel_path));
            }
        }
    }
}

/// Walk `options.root` and collect every matching path.
///
/// Convenience wrapper over [`FileWalk`] for callers that do not need
/// streaming output.
pub fn list_files(options: &ListOptions) -> Result<Vec<String>> {
    FileWalk::new(options)?.collect()
}
