use super::tags::PIXEL_DATA;
use crate::api::{DocumentMetadata, MetadataExtractor};
use crate::error::Result;
use dicom_object::OpenFileOptions;
use log::warn;
use std::path::Path;

/// Opens a file as DICOM, stopping before Pixel Data
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not DICOM.
pub fn open_header(path: &Path) -> Result<DocumentMetadata> {
    let dcm = OpenFileOptions::new().read_until(PIXEL_DATA).open_file(path)?;
    Ok(MetadataExtractor::extract(&dcm))
}

/// Reads header metadata from any file
///
/// Files that are not parseable as DICOM (wrong format, truncated, permission
/// denied) yield `None` and a warning, never an error.
pub fn read_metadata(path: &Path) -> Option<DocumentMetadata> {
    match open_header(path) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            warn!("Non DICOM file excluded: {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{write_dicom, write_rdsr, SECONDARY_CAPTURE_SOP_CLASS_UID};
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_rdsr_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dose.dcm");
        write_rdsr(&path, "1.2.3.4", "20250409", "101500");

        let metadata = read_metadata(&path).unwrap();

        assert_eq!(
            metadata.sop_class_uid.as_deref(),
            Some("1.2.840.10008.5.1.4.1.1.88.67")
        );
        assert_eq!(metadata.sop_instance_uid.as_deref(), Some("1.2.3.4"));
        assert_eq!(metadata.study_date.as_deref(), Some("20250409"));
        assert_eq!(metadata.study_time.as_deref(), Some("101500"));
    }

    #[test]
    fn test_reads_other_document_types() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("capture.dcm");
        write_dicom(&path, SECONDARY_CAPTURE_SOP_CLASS_UID, "1.2.3.5", None, None);

        let metadata = read_metadata(&path).unwrap();

        assert_eq!(
            metadata.sop_class_uid.as_deref(),
            Some(SECONDARY_CAPTURE_SOP_CLASS_UID)
        );
        assert!(metadata.study_date.is_none());
    }

    #[rstest]
    #[case::plain_text(b"This is not a DICOM file".to_vec())]
    #[case::empty(Vec::new())]
    #[case::preamble_only([0u8; 128].to_vec())]
    #[case::wrong_magic([&[0u8; 128][..], &b"NOTM"[..]].concat())]
    fn test_unparseable_files_yield_none(#[case] content: Vec<u8>) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("junk");
        fs::write(&path, content).unwrap();

        assert!(read_metadata(&path).is_none());
    }

    #[test]
    fn test_truncated_dicom_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dose.dcm");
        write_rdsr(&path, "1.2.3.4", "20250409", "101500");
        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..140]).unwrap();

        assert!(read_metadata(&path).is_none());
    }

    #[test]
    fn test_missing_file_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_metadata(&temp_dir.path().join("absent.dcm")).is_none());
    }
}
