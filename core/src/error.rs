use std::path::PathBuf;
use thiserror::Error;

/// Result type for rdsr operations
pub type Result<T> = std::result::Result<T, RdsrError>;

/// Error types for rdsr operations
#[derive(Error, Debug)]
pub enum RdsrError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// A file classified as RDSR lacks a field needed to name its copy
    #[error("RDSR file {} has no {field}", .path.display())]
    MissingRequiredField { path: PathBuf, field: &'static str },

    /// A field of an RDSR file cannot be used in a file name
    #[error("RDSR file {} has invalid {field}: {value:?}", .path.display())]
    InvalidValue {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    /// File is readable but is not a Radiation Dose Structured Report
    #[error("Not an RDSR file: {}", .0.display())]
    NotRdsr(PathBuf),

    /// Root or destination folder could not be resolved
    #[error("Setup error: {0}")]
    Setup(String),

    /// External dose engine failure
    #[error("Dose engine error: {0}")]
    Dose(String),

    /// Settings or engine output could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for RdsrError {
    fn from(e: dicom_object::ReadError) -> Self {
        RdsrError::DicomError(format!("{}", e))
    }
}
