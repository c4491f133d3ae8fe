use crate::page_range::PageRange;
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Destination for one source:
/// `<output_dir>/<stem>_pages_<start>-<end><.ext>`
///
/// The name carries the requested range even when the document is shorter.
pub fn output_path_for(source: &Path, range: PageRange, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    output_dir.join(format!(
        "{}_pages_{}-{}{}",
        stem,
        range.start(),
        range.end(),
        extension
    ))
}

/// Called before each file is extracted with the source and its destination.
pub type Progress<'a> = &'a mut dyn FnMut(&Path, &Path);

/// Extract pages `start..=end` from every source into `output_dir`.
///
/// Stops at the first failure. Returns the written paths in input order.
pub fn extract_many<P: AsRef<Path>, Q: AsRef<Path>>(
    sources: &[P],
    start: u32,
    end: u32,
    output_dir: Q,
) -> Result<Vec<PathBuf>> {
    let range = PageRange::new(start, end)?;
    extract_many_with_progress(sources, range, output_dir.as_ref(), &mut |_, _| {})
}

pub fn extract_many_with_progress<P: AsRef<Path>>(
    sources: &[P],
    range: PageRange,
    output_dir: &Path,
    progress: Progress<'_>,
) -> Result<Vec<PathBuf>> {
    create_output_dir(output_dir)?;

    let mut outputs = Vec::with_capacity(sources.len());
    for source in sources {
        let source = source.as_ref();
        let dest = output_path_for(source, range, output_dir);
        progress(source, &dest);
        extract_one(source, range, &dest)?;
        outputs.push(dest);
    }

    Ok(outputs)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    pub source: PathBuf,
    pub message: String,
}

impl BatchFailure {
    /// Source file name for display
    pub fn name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outputs: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Extract `range` from every source into `output_dir`, recording per-file
/// failures instead of stopping at them.
///
/// If `output_dir` cannot be created, every source is recorded as failed
/// with that cause.
pub fn extract_each<P: AsRef<Path>>(
    sources: &[P],
    range: PageRange,
    output_dir: &Path,
    progress: Progress<'_>,
) -> BatchReport {
    let dir_ready = create_output_dir(output_dir);

    let mut report = BatchReport::default();
    for source in sources {
        let source = source.as_ref();
        let dest = output_path_for(source, range, output_dir);
        progress(source, &dest);

        let result = match &dir_ready {
            Ok(()) => extract_one(source, range, &dest).map_err(|e| format!("{:#}", e)),
            Err(e) => Err(format!("{:#}", e)),
        };
        match result {
            Ok(()) => report.outputs.push(dest),
            Err(message) => {
                warn!(source = %source.display(), error = %message, "extraction failed");
                report.failures.push(BatchFailure {
                    source: source.to_path_buf(),
                    message,
                });
            }
        }
    }

    report
}

fn extract_one(source: &Path, range: PageRange, dest: &Path) -> Result<()> {
    let doc = PdfDocument::open(source)?;
    doc.extract_range_to(range, dest)
}

fn create_output_dir(output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeError;
    use crate::test_support::{page_tags, write_sample_pdf};
    use tempfile::TempDir;

    fn range(start: u32, end: u32) -> PageRange {
        PageRange::new(start, end).unwrap()
    }

    #[test]
    fn test_output_path_naming() {
        let dest = output_path_for(Path::new("in/report.pdf"), range(10, 25), Path::new("out"));
        assert_eq!(dest, PathBuf::from("out/report_pages_10-25.pdf"));
    }

    #[test]
    fn test_output_path_keeps_extension_case_and_inner_dots() {
        let dest = output_path_for(Path::new("v1.2.PDF"), range(1, 2), Path::new("out"));
        assert_eq!(dest, PathBuf::from("out/v1.2_pages_1-2.PDF"));
    }

    #[test]
    fn test_output_path_without_extension() {
        let dest = output_path_for(Path::new("scan"), range(3, 4), Path::new("out"));
        assert_eq!(dest, PathBuf::from("out/scan_pages_3-4"));
    }

    #[test]
    fn test_extract_many_writes_in_input_order() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", 3);
        let b = write_sample_pdf(dir.path(), "b.pdf", 5);
        let out = dir.path().join("out");

        let outputs = extract_many(&[&a, &b], 1, 2, &out).unwrap();

        assert_eq!(
            outputs,
            vec![out.join("a_pages_1-2.pdf"), out.join("b_pages_1-2.pdf")]
        );
        assert_eq!(page_tags(&outputs[0]), vec![1, 2]);
        assert_eq!(page_tags(&outputs[1]), vec![1, 2]);
    }

    #[test]
    fn test_extract_many_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", 3);
        let out = dir.path().join("missing").join("out");
        assert!(!out.exists());

        extract_many(&[&a], 2, 3, &out).unwrap();

        assert!(out.is_dir());
        assert!(out.join("a_pages_2-3.pdf").is_file());
    }

    #[test]
    fn test_extract_many_rejects_invalid_range() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", 3);
        let out = dir.path().join("out");

        let err = extract_many(&[&a], 3, 1, &out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RangeError>(),
            Some(RangeError::InvalidRange { .. })
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_extract_many_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let short = write_sample_pdf(dir.path(), "short.pdf", 2);
        let long = write_sample_pdf(dir.path(), "long.pdf", 10);
        let out = dir.path().join("out");

        let err = extract_many(&[&short, &long], 5, 6, &out).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Range 5-6 exceeds PDF 'short.pdf' (2 pages)."
        );
        assert!(!out.join("long_pages_5-6.pdf").exists());
    }

    #[test]
    fn test_extract_each_continues_past_failures() {
        let dir = TempDir::new().unwrap();
        let short = write_sample_pdf(dir.path(), "short.pdf", 2);
        let long = write_sample_pdf(dir.path(), "long.pdf", 10);
        let missing = dir.path().join("missing.pdf");
        let out = dir.path().join("out");

        let mut seen = Vec::new();
        let report = extract_each(
            &[&short, &missing, &long],
            range(5, 6),
            &out,
            &mut |source, _| seen.push(source.to_path_buf()),
        );

        assert_eq!(seen, vec![short.clone(), missing.clone(), long.clone()]);
        assert_eq!(report.outputs, vec![out.join("long_pages_5-6.pdf")]);
        assert_eq!(page_tags(&report.outputs[0]), vec![5, 6]);

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].name(), "short.pdf");
        assert_eq!(
            report.failures[0].message,
            "Range 5-6 exceeds PDF 'short.pdf' (2 pages)."
        );
        assert_eq!(report.failures[1].source, missing);
        assert!(report.failures[1].message.starts_with("Failed to open PDF"));
    }

    #[test]
    fn test_extract_each_reports_underlying_cause() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.pdf");
        std::fs::write(&bad, b"not a pdf").unwrap();
        let out = dir.path().join("out");

        let report = extract_each(&[&bad], range(1, 2), &out, &mut |_, _| {});

        assert!(report.outputs.is_empty());
        let prefix = format!("Failed to open PDF: {}: ", bad.display());
        let message = &report.failures[0].message;
        assert!(message.starts_with(&prefix), "{}", message);
        assert!(message.len() > prefix.len(), "{}", message);
    }

    #[test]
    fn test_extract_each_records_unusable_output_dir() {
        let dir = TempDir::new().unwrap();
        let a = write_sample_pdf(dir.path(), "a.pdf", 3);
        let b = write_sample_pdf(dir.path(), "b.pdf", 3);
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, b"").unwrap();

        let mut calls = 0;
        let report = extract_each(&[&a, &b], range(1, 2), &blocker, &mut |_, _| calls += 1);

        assert_eq!(calls, 2);
        assert!(report.outputs.is_empty());
        assert_eq!(report.failures.len(), 2);
        for failure in &report.failures {
            assert!(
                failure.message.starts_with(&format!(
                    "Failed to create directory: {}: ",
                    blocker.display()
                )),
                "{}",
                failure.message
            );
        }
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = BatchReport {
            outputs: vec![PathBuf::from("out/a_pages_1-2.pdf")],
            failures: vec![BatchFailure {
                source: PathBuf::from("b.pdf"),
                message: "boom".to_string(),
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outputs"][0], "out/a_pages_1-2.pdf");
        assert_eq!(json["failures"][0]["message"], "boom");
    }
}
