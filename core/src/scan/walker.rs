use crate::types::ScanOptions;
use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazy recursive listing of every regular file below a root
///
/// Directories are descended, never yielded. A file reachable through
/// several paths (symlinks, when followed) is yielded once, under the first
/// path it was reached by. Unreadable directories and symlink loops are
/// logged and skipped.
pub struct TreeScanner {
    entries: walkdir::IntoIter,
    visited: HashSet<PathBuf>,
}

impl TreeScanner {
    pub fn new(root: &Path, options: &ScanOptions) -> Self {
        let mut walker = WalkDir::new(root).follow_links(options.follow_symlinks);
        if options.sort_entries {
            walker = walker.sort_by_file_name();
        }
        Self {
            entries: walker.into_iter(),
            visited: HashSet::new(),
        }
    }
}

impl Iterator for TreeScanner {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let identity =
                fs::canonicalize(entry.path()).unwrap_or_else(|_| entry.path().to_path_buf());
            if !self.visited.insert(identity) {
                debug!("Already visited: {}", entry.path().display());
                continue;
            }

            return Some(entry.into_path());
        }
    }
}
