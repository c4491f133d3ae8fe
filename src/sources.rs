use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Expand a list of inputs into source PDF paths.
///
/// Files are kept as given, in the order given. A directory is replaced by the
/// `.pdf` files found beneath it, sorted by path.
pub fn expand_sources<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            let found = pdfs_in_dir(input)?;
            debug!(dir = %input.display(), count = found.len(), "expanded directory");
            sources.extend(found);
        } else {
            sources.push(input.to_path_buf());
        }
    }

    Ok(sources)
}

fn pdfs_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entry.file_type().is_file() && is_pdf(entry.path()) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
