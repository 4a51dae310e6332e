use crate::types::{CollisionPolicy, DestinationName};
use filetime::FileTime;
use log::warn;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Copies a file's full contents and carries over its access and
/// modification times
///
/// Only the content copy can fail. Timestamps that cannot be carried over
/// are logged, and the copy still counts as done.
pub fn copy_file_with_metadata(path_src: &Path, path_dst: &Path) -> io::Result<()> {
    fs::copy(path_src, path_dst)?;

    if let Err(e) = copy_file_times(path_src, path_dst) {
        warn!(
            "Copied {} without its timestamps: {}",
            path_dst.display(),
            e
        );
    }
    Ok(())
}

fn copy_file_times(path_src: &Path, path_dst: &Path) -> io::Result<()> {
    let stat_src = fs::metadata(path_src)?;
    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    filetime::set_file_times(path_dst, file_time_access, file_time_modify)
}

/// Destination name chosen for one copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub name: DestinationName,

    /// The name was already written earlier in this run
    pub replaces_earlier: bool,
}

/// Tracks the names written during one scan and applies the collision policy
#[derive(Debug)]
pub struct DestinationPlanner {
    policy: CollisionPolicy,
    written: HashSet<DestinationName>,
}

impl DestinationPlanner {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            written: HashSet::new(),
        }
    }

    /// Picks the name to copy to, given the name derived from metadata
    pub fn plan(&self, base: DestinationName) -> PlannedCopy {
        if !self.written.contains(&base) {
            return PlannedCopy {
                name: base,
                replaces_earlier: false,
            };
        }

        match self.policy {
            CollisionPolicy::Overwrite => PlannedCopy {
                name: base,
                replaces_earlier: true,
            },
            CollisionPolicy::Suffix => {
                let mut sequence = 1;
                while self.written.contains(&base.with_sequence(sequence)) {
                    sequence += 1;
                }
                PlannedCopy {
                    name: base.with_sequence(sequence),
                    replaces_earlier: false,
                }
            }
        }
    }

    /// Marks a name as written
    pub fn record(&mut self, name: DestinationName) {
        self.written.insert(name);
    }
}
