use thiserror::Error;

/// Failures that come from the requested page range itself rather than from
/// I/O or the PDF library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid range format: '{input}'. Use e.g. '10-25'.")]
    InvalidRange { input: String },

    #[error("Range {start}-{end} exceeds PDF '{document}' ({page_count} pages).")]
    StartOutOfBounds {
        start: u32,
        end: u32,
        document: String,
        page_count: u32,
    },
}

impl RangeError {
    pub fn invalid(input: impl Into<String>) -> Self {
        RangeError::InvalidRange {
            input: input.into(),
        }
    }
}
