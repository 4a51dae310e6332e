use serde::Serialize;
use std::path::PathBuf;

/// Tally of one scan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanReport {
    /// Regular files visited
    pub files_scanned: usize,

    /// Files that could not be read as DICOM
    pub unreadable: Vec<PathBuf>,

    /// Files classified as RDSR
    pub matched: usize,

    /// Copies performed, in traversal order
    pub copied: Vec<CopiedFile>,

    /// Copies that failed
    pub failed: Vec<FailedCopy>,

    /// Copies that replaced a file written earlier in the same scan
    pub overwritten: usize,
}

/// A successful copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopiedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// A copy that could not be performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCopy {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: String,
}

impl ScanReport {
    /// Whether every matched file was copied
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
