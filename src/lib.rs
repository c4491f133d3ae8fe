//! Slice a contiguous page range out of one or more PDFs.
//!
//! ```no_run
//! let written = pdfrange::extract_many(&["a.pdf", "b.pdf"], 1, 2, "out")?;
//! assert_eq!(written[0], std::path::Path::new("out/a_pages_1-2.pdf"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod mcp;
pub mod page_range;
pub mod pdf;
pub mod sources;

#[cfg(test)]
mod test_support;

pub use batch::{extract_each, extract_many, output_path_for, BatchFailure, BatchReport};
pub use error::RangeError;
pub use page_range::PageRange;
pub use pdf::PdfDocument;
