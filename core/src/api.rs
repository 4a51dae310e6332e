use crate::extraction::tags::{
    get_string_value, MANUFACTURER, MODALITY, SOP_CLASS_UID, SOP_INSTANCE_UID, STATION_NAME,
    STUDY_DATE, STUDY_TIME,
};
use dicom_object::InMemDicomObject;
use serde::Serialize;

/// Extractor for the header fields used to locate and name RDSR files
///
/// # Example
///
/// ```
/// use rdsr_core::MetadataExtractor;
/// use dicom_object::InMemDicomObject;
/// use dicom_core::{DataElement, PrimitiveValue, VR, Tag};
///
/// let mut dcm = InMemDicomObject::new_empty();
/// dcm.put(DataElement::new(
///     Tag(0x0008, 0x0016), // SOPClassUID
///     VR::UI,
///     PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.88.67"),
/// ));
/// dcm.put(DataElement::new(
///     Tag(0x0008, 0x0020), // StudyDate
///     VR::DA,
///     PrimitiveValue::from("20250409"),
/// ));
///
/// let metadata = MetadataExtractor::extract(&dcm);
///
/// assert_eq!(metadata.study_date.as_deref(), Some("20250409"));
/// assert!(metadata.study_time.is_none());
/// ```
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extracts header metadata from an open DICOM object
    ///
    /// Never fails: absent or unreadable tags become `None`.
    pub fn extract(dcm: &InMemDicomObject) -> DocumentMetadata {
        DocumentMetadata {
            sop_class_uid: non_empty(get_string_value(dcm, SOP_CLASS_UID)),
            sop_instance_uid: non_empty(get_string_value(dcm, SOP_INSTANCE_UID)),
            study_date: non_empty(get_string_value(dcm, STUDY_DATE)),
            study_time: non_empty(get_string_value(dcm, STUDY_TIME)),
            modality: non_empty(get_string_value(dcm, MODALITY)),
            manufacturer: non_empty(get_string_value(dcm, MANUFACTURER)),
            station_name: non_empty(get_string_value(dcm, STATION_NAME)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Header metadata of a DICOM file
///
/// Read up to, but excluding, Pixel Data. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentMetadata {
    /// SOP Class UID, identifies the document type
    pub sop_class_uid: Option<String>,

    /// SOP Instance UID
    pub sop_instance_uid: Option<String>,

    /// Study date (DA, `YYYYMMDD`)
    pub study_date: Option<String>,

    /// Study time (TM, `HHMMSS.FFFFFF`)
    pub study_time: Option<String>,

    /// Modality
    pub modality: Option<String>,

    /// Manufacturer name
    pub manufacturer: Option<String>,

    /// Station name
    pub station_name: Option<String>,
}
