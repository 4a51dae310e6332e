use crate::api::DocumentMetadata;
use log::info;
use std::path::Path;

/// SOP Class UID of X-Ray Radiation Dose SR Storage
pub const RDSR_SOP_CLASS_UID: &str = "1.2.840.10008.5.1.4.1.1.88.67";

/// Checks whether metadata identifies a Radiation Dose Structured Report
///
/// Exact match of the SOP Class UID against [`RDSR_SOP_CLASS_UID`]. A missing
/// UID or any other value is simply not an RDSR. Matches are logged with
/// their path.
pub fn is_rdsr(metadata: &DocumentMetadata, path: &Path) -> bool {
    if metadata.sop_class_uid.as_deref() == Some(RDSR_SOP_CLASS_UID) {
        info!("RDSR file found: {}", path.display());
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn metadata_with_class(uid: Option<&str>) -> DocumentMetadata {
        DocumentMetadata {
            sop_class_uid: uid.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_rdsr_class_matches() {
        let metadata = metadata_with_class(Some(RDSR_SOP_CLASS_UID));
        assert!(is_rdsr(&metadata, Path::new("dose.dcm")));
    }

    #[rstest]
    #[case::missing(None)]
    #[case::secondary_capture(Some("1.2.840.10008.5.1.4.1.1.7"))]
    #[case::enhanced_sr(Some("1.2.840.10008.5.1.4.1.1.88.22"))]
    #[case::prefix(Some("1.2.840.10008.5.1.4.1.1.88.6"))]
    #[case::longer(Some("1.2.840.10008.5.1.4.1.1.88.671"))]
    #[case::empty(Some(""))]
    fn test_other_classes_do_not_match(#[case] uid: Option<&str>) {
        let metadata = metadata_with_class(uid);
        assert!(!is_rdsr(&metadata, Path::new("other.dcm")));
    }
}
