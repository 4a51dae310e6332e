use serde::Serialize;
use std::fmt;

/// What to do when two RDSR files map to the same destination name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Later copy replaces the earlier one (last writer wins)
    #[default]
    Overwrite,
    /// Later copies get a sequence suffix: `_1`, `_2`, ...
    Suffix,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Suffix => write!(f, "suffix"),
        }
    }
}

/// Configuration for an RDSR scan
///
/// # Example
///
/// ```
/// use rdsr_core::{CollisionPolicy, ScanOptions};
///
/// let options = ScanOptions::default()
///     .collision_policy(CollisionPolicy::Suffix)
///     .sort_entries(true);
///
/// assert_eq!(options.collision_policy, CollisionPolicy::Suffix);
/// assert!(options.sort_entries);
/// assert!(!options.follow_symlinks);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOptions {
    /// Destination name collision handling
    pub collision_policy: CollisionPolicy,

    /// Descend into symlinked directories and read symlinked files
    ///
    /// Off by default. When on, symlink loops are detected and every
    /// file is still visited once.
    pub follow_symlinks: bool,

    /// Visit siblings in file name order instead of filesystem order
    pub sort_entries: bool,
}

impl ScanOptions {
    /// Builder: Set collision policy
    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Builder: Follow symbolic links
    ///
    /// # Example
    ///
    /// ```
    /// use rdsr_core::ScanOptions;
    ///
    /// let options = ScanOptions::default().follow_symlinks(true);
    /// assert!(options.follow_symlinks);
    /// ```
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Builder: Sort sibling entries by file name
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }
}
