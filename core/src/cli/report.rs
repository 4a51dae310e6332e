use crate::scan::ScanReport;
use std::fmt;

/// Text report formatter for a scan
pub struct TextReport<'a> {
    report: &'a ScanReport,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(report: &'a ScanReport) -> Self {
        Self { report }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RDSR Scan")?;
        writeln!(f, "=========")?;
        writeln!(f)?;
        writeln!(f, "Files scanned:  {}", self.report.files_scanned)?;
        writeln!(f, "Not DICOM:      {}", self.report.unreadable.len())?;
        writeln!(f, "RDSR found:     {}", self.report.matched)?;
        writeln!(f, "Copied:         {}", self.report.copied.len())?;
        writeln!(f, "Overwritten:    {}", self.report.overwritten)?;
        writeln!(f, "Failed:         {}", self.report.failed.len())?;

        if !self.report.copied.is_empty() {
            writeln!(f)?;
            writeln!(f, "Copies")?;
            writeln!(f, "------")?;
            for copy in &self.report.copied {
                writeln!(
                    f,
                    "{} -> {}",
                    copy.source.display(),
                    copy.destination.display()
                )?;
            }
        }

        if !self.report.failed.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failures")?;
            writeln!(f, "--------")?;
            for failure in &self.report.failed {
                writeln!(f, "{}: {}", failure.source.display(), failure.error)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{CopiedFile, FailedCopy};
    use std::path::PathBuf;

    #[test]
    fn test_text_report_format() {
        let report = ScanReport {
            files_scanned: 5,
            unreadable: vec![PathBuf::from("/in/notes.txt")],
            matched: 2,
            copied: vec![CopiedFile {
                source: PathBuf::from("/in/a.dcm"),
                destination: PathBuf::from("/out/20250409_10_RDSR.dcm"),
            }],
            failed: vec![FailedCopy {
                source: PathBuf::from("/in/b.dcm"),
                destination: PathBuf::from("/out/20250410_08_RDSR.dcm"),
                error: "Permission denied".to_string(),
            }],
            overwritten: 0,
        };

        let output = format!("{}", TextReport::new(&report));

        assert!(output.contains("Files scanned:  5"));
        assert!(output.contains("Not DICOM:      1"));
        assert!(output.contains("RDSR found:     2"));
        assert!(output.contains("/in/a.dcm -> /out/20250409_10_RDSR.dcm"));
        assert!(output.contains("/in/b.dcm: Permission denied"));
    }

    #[test]
    fn test_empty_report_has_no_sections() {
        let output = format!("{}", TextReport::new(&ScanReport::default()));
        assert!(!output.contains("Copies"));
        assert!(!output.contains("Failures"));
    }
}
