use crate::batch::extract_many_with_progress;
use crate::commands::interactive::progress_line;
use crate::page_range::PageRange;
use crate::sources::expand_sources;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct ExtractOptions {
    pub start: u32,
    pub end: u32,
    pub output_dir: PathBuf,
    pub json: bool,
}

pub fn run<P: AsRef<Path>>(inputs: &[P], options: &ExtractOptions) -> Result<()> {
    let range = PageRange::new(options.start, options.end)?;
    let sources = expand_sources(inputs)?;

    if sources.is_empty() {
        anyhow::bail!("No PDF files found");
    }

    let json = options.json;
    let outputs = extract_many_with_progress(
        &sources,
        range,
        &options.output_dir,
        &mut |source, dest| {
            if !json {
                println!("{}", progress_line(source, range, dest));
            }
        },
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
    } else {
        println!("✅ Done.");
    }

    Ok(())
}
