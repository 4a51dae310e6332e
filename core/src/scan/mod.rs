//! Discovery and copy of RDSR files
//!
//! [`RdsrLocator`] walks a root directory, reads the header of every regular
//! file, and copies each Radiation Dose Structured Report into a destination
//! directory as `{StudyDate}_{HH}_RDSR.dcm`.
//!
//! Per-file problems never stop a scan: unreadable files are skipped with a
//! warning and failed copies are logged and reported. An RDSR whose
//! StudyDate or StudyTime is missing, or cannot be used in a file name, does
//! stop it, with the offending path.

mod copier;
mod report;
mod walker;

pub use copier::{copy_file_with_metadata, DestinationPlanner, PlannedCopy};
pub use report::{CopiedFile, FailedCopy, ScanReport};
pub use walker::TreeScanner;

use crate::error::Result;
use crate::extraction::{is_rdsr, read_metadata};
use crate::types::{DestinationName, ScanOptions};
use log::{debug, error, info};
use std::path::Path;

/// Finds RDSR files below a root directory and copies them to a destination
///
/// Root and destination are expected to be resolved already (see
/// [`crate::setup`]); no validation happens here.
#[derive(Debug, Clone, Default)]
pub struct RdsrLocator {
    options: ScanOptions,
}

impl RdsrLocator {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Runs one scan
    ///
    /// # Errors
    ///
    /// Returns [`crate::RdsrError::MissingRequiredField`] if a file classified
    /// as RDSR has no StudyDate or StudyTime, and
    /// [`crate::RdsrError::InvalidValue`] if one would lead outside `dest`.
    pub fn run(&self, root: &Path, dest: &Path) -> Result<ScanReport> {
        info!("Finding RDSR files in {}", root.display());

        let mut report = ScanReport::default();
        let mut planner = DestinationPlanner::new(self.options.collision_policy);

        for path in TreeScanner::new(root, &self.options) {
            report.files_scanned += 1;

            let Some(metadata) = read_metadata(&path) else {
                report.unreadable.push(path);
                continue;
            };
            if !is_rdsr(&metadata, &path) {
                continue;
            }
            report.matched += 1;

            let planned = planner.plan(DestinationName::from_metadata(&metadata, &path)?);
            let dest_path = dest.join(planned.name.as_str());

            match copy_file_with_metadata(&path, &dest_path) {
                Ok(()) => {
                    info!("Copying {} to {}", path.display(), dest_path.display());
                    if planned.replaces_earlier {
                        debug!("Replaced earlier copy at {}", dest_path.display());
                        report.overwritten += 1;
                    }
                    planner.record(planned.name);
                    report.copied.push(CopiedFile {
                        source: path,
                        destination: dest_path,
                    });
                }
                Err(e) => {
                    error!(
                        "Failed to copy {} to {}: {}",
                        path.display(),
                        dest_path.display(),
                        e
                    );
                    report.failed.push(FailedCopy {
                        source: path,
                        destination: dest_path,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Scanned {} files: {} RDSR, {} copied, {} failed, {} unreadable",
            report.files_scanned,
            report.matched,
            report.copied.len(),
            report.failed.len(),
            report.unreadable.len()
        );

        Ok(report)
    }
}

/// Scans `root` with default options and copies every RDSR into `dest`
pub fn find_rdsr_files(root: &Path, dest: &Path) -> Result<ScanReport> {
    RdsrLocator::default().run(root, dest)
}
