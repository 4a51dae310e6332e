use crate::api::DocumentMetadata;
use crate::error::{RdsrError, Result};
use std::fmt;
use std::path::Path;

const RDSR_SUFFIX: &str = "RDSR";
const RDSR_EXTENSION: &str = "dcm";

/// File name an RDSR copy is stored under
///
/// `{StudyDate}_{HH}_RDSR.dcm`, where `HH` is the first two characters of
/// StudyTime.
///
/// # Example
///
/// ```
/// use rdsr_core::DestinationName;
///
/// let name = DestinationName::new("20250409", "101500");
/// assert_eq!(name.as_str(), "20250409_10_RDSR.dcm");
/// assert_eq!(name.with_sequence(2).as_str(), "20250409_10_RDSR_2.dcm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DestinationName {
    stem: String,
    name: String,
}

impl DestinationName {
    /// Builds the name from raw StudyDate and StudyTime values
    pub fn new(study_date: &str, study_time: &str) -> Self {
        let hour: String = study_time.chars().take(2).collect();
        let stem = format!("{}_{}_{}", study_date, hour, RDSR_SUFFIX);
        let name = format!("{}.{}", stem, RDSR_EXTENSION);
        Self { stem, name }
    }

    /// Builds the name for a file already classified as RDSR
    ///
    /// # Errors
    ///
    /// Returns [`RdsrError::MissingRequiredField`] with the source path if
    /// StudyDate or StudyTime is absent or empty, and
    /// [`RdsrError::InvalidValue`] if either holds a path separator, a drive
    /// colon, a NUL or `..`.
    pub fn from_metadata(metadata: &DocumentMetadata, path: &Path) -> Result<Self> {
        let study_date = required(metadata.study_date.as_deref(), "StudyDate", path)?;
        let study_time = required(metadata.study_time.as_deref(), "StudyTime", path)?;
        Ok(Self::new(study_date, study_time))
    }

    /// Same name with a disambiguating sequence number
    pub fn with_sequence(&self, sequence: usize) -> Self {
        let stem = format!("{}_{}", self.stem, sequence);
        let name = format!("{}.{}", stem, RDSR_EXTENSION);
        Self { stem, name }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

fn required<'a>(value: Option<&'a str>, field: &'static str, path: &Path) -> Result<&'a str> {
    match value {
        Some(v) if v.is_empty() => Err(missing(field, path)),
        Some(v) if !is_name_safe(v) => Err(RdsrError::InvalidValue {
            path: path.to_path_buf(),
            field,
            value: v.to_string(),
        }),
        Some(v) => Ok(v),
        None => Err(missing(field, path)),
    }
}

fn missing(field: &'static str, path: &Path) -> RdsrError {
    RdsrError::MissingRequiredField {
        path: path.to_path_buf(),
        field,
    }
}

/// The value stays inside a single file name component
fn is_name_safe(value: &str) -> bool {
    !value.contains(|c: char| matches!(c, '/' | '\\' | ':' | '\0')) && !value.contains("..")
}

impl fmt::Display for DestinationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<Path> for DestinationName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.name)
    }
}
