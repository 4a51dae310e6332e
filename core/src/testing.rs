//! Fixtures for tests that need real DICOM files on disk

use crate::extraction::tags::{SOP_CLASS_UID, SOP_INSTANCE_UID, STUDY_DATE, STUDY_TIME};
use crate::extraction::RDSR_SOP_CLASS_UID;
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
use std::path::Path;

const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";

/// Secondary Capture Image Storage, a non-RDSR document type
pub const SECONDARY_CAPTURE_SOP_CLASS_UID: &str = "1.2.840.10008.5.1.4.1.1.7";

/// Writes a DICOM file with the given SOP class and optional study fields
pub fn write_dicom(
    path: &Path,
    sop_class_uid: &str,
    instance_uid: &str,
    study_date: Option<&str>,
    study_time: Option<&str>,
) {
    let mut obj = InMemDicomObject::new_empty();
    obj.put(DataElement::new(
        SOP_CLASS_UID,
        VR::UI,
        PrimitiveValue::from(sop_class_uid),
    ));
    obj.put(DataElement::new(
        SOP_INSTANCE_UID,
        VR::UI,
        PrimitiveValue::from(instance_uid),
    ));
    if let Some(date) = study_date {
        obj.put(DataElement::new(STUDY_DATE, VR::DA, PrimitiveValue::from(date)));
    }
    if let Some(time) = study_time {
        obj.put(DataElement::new(STUDY_TIME, VR::TM, PrimitiveValue::from(time)));
    }

    let file_obj = obj
        .with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(sop_class_uid)
                .media_storage_sop_instance_uid(instance_uid),
        )
        .unwrap();
    file_obj.write_to_file(path).unwrap();
}

/// Writes an RDSR file with the given study date and time
pub fn write_rdsr(path: &Path, instance_uid: &str, study_date: &str, study_time: &str) {
    write_dicom(
        path,
        RDSR_SOP_CLASS_UID,
        instance_uid,
        Some(study_date),
        Some(study_time),
    );
}
