use crate::error::RangeError;
use crate::page_range::PageRange;
use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let doc = Document::load(path)
            .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
        Ok(PdfDocument {
            doc,
            path: path.to_path_buf(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// File name used when reporting errors about this document
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Copy the pages covered by `range` into a new document.
    ///
    /// An `end` past the last page is clamped; a `start` past the last page
    /// is a [`RangeError::StartOutOfBounds`].
    pub fn extract_range(&self, range: PageRange) -> Result<Document> {
        let total = self.page_count();
        let clamped = range
            .clamp_to(total)
            .ok_or_else(|| RangeError::StartOutOfBounds {
                start: range.start(),
                end: range.end(),
                document: self.name(),
                page_count: total,
            })?;

        debug!(
            document = %self.path.display(),
            total,
            requested = %range,
            extracted = %clamped,
            "extracting page range"
        );

        let mut new_doc = self.doc.clone();

        // Get page numbers to delete (pages outside the range)
        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|num| !clamped.contains(*num))
            .collect();

        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            new_doc.prune_objects();
        }

        Ok(new_doc)
    }

    /// Extract `range` and write it to `output`, creating parent directories
    /// as needed.
    pub fn extract_range_to<P: AsRef<Path>>(&self, range: PageRange, output: P) -> Result<()> {
        let mut new_doc = self.extract_range(range)?;
        PdfDocument::save(&mut new_doc, output)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // The returned file handle is dropped, and so closed, right here.
        doc.save(path)
            .with_context(|| format!("Failed to save PDF: {}", path.display()))?;

        info!(output = %path.display(), pages = doc.get_pages().len(), "wrote PDF");
        Ok(())
    }
}
