use crate::batch::{extract_each, BatchReport};
use crate::page_range::PageRange;
use crate::sources::expand_sources;
use anyhow::Result;
use console::{style, Term};
use std::path::{Path, PathBuf};
use tracing::info;

/// The three questions the interactive flow asks, plus the ways it reports
/// back. An empty answer means the user cancelled that step.
pub trait Prompter {
    fn pick_sources(&mut self) -> Result<Vec<PathBuf>>;
    fn pick_output_dir(&mut self) -> Result<Option<PathBuf>>;
    fn ask_range(&mut self) -> Result<Option<String>>;

    /// Progress line printed before each file is extracted
    fn progress(&mut self, line: &str) -> Result<()>;

    fn show_info(&mut self, title: &str, message: &str) -> Result<()>;
    fn show_warning(&mut self, title: &str, message: &str) -> Result<()>;
    fn show_error(&mut self, title: &str, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Sources,
    OutputDir,
    Range,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Cancelled(Step),
    InvalidRange(String),
    Finished(BatchReport),
}

pub fn run<T: Prompter>(prompter: &mut T) -> Result<Outcome> {
    let sources = expand_sources(&prompter.pick_sources()?)?;
    if sources.is_empty() {
        prompter.progress("No files selected. Exiting.")?;
        return Ok(Outcome::Cancelled(Step::Sources));
    }

    let Some(output_dir) = prompter.pick_output_dir()? else {
        prompter.progress("No output directory selected. Exiting.")?;
        return Ok(Outcome::Cancelled(Step::OutputDir));
    };

    let range_str = match prompter.ask_range()? {
        Some(s) if !s.is_empty() => s,
        _ => {
            prompter.progress("No range provided. Exiting.")?;
            return Ok(Outcome::Cancelled(Step::Range));
        }
    };

    let range = match PageRange::parse(&range_str) {
        Ok(range) => range,
        Err(e) => {
            let message = e.to_string();
            prompter.show_error("Input error", &message)?;
            return Ok(Outcome::InvalidRange(message));
        }
    };

    info!(count = sources.len(), %range, output_dir = %output_dir.display(), "starting batch");

    // The batch callback cannot fail, so the first write error is held until
    // the batch is done.
    let mut write_error = None;
    let report = {
        let mut on_file = |source: &Path, dest: &Path| {
            if let Err(e) = prompter.progress(&progress_line(source, range, dest)) {
                write_error.get_or_insert(e);
            }
        };
        extract_each(&sources, range, &output_dir, &mut on_file)
    };
    if let Some(e) = write_error {
        return Err(e);
    }

    if report.is_success() {
        prompter.show_info(
            "Success",
            &format!("Finished! Files saved to:\n{}", output_dir.display()),
        )?;
        prompter.progress("✅ Done.")?;
    } else {
        for failure in &report.failures {
            prompter.progress(&format!("✖ Failed for {}: {}", failure.name(), failure.message))?;
        }
        prompter.show_warning(
            "Finished with errors",
            &format!("Some files failed:\n\n{}", failure_summary(&report)),
        )?;
    }

    Ok(Outcome::Finished(report))
}

pub fn progress_line(source: &Path, range: PageRange, dest: &Path) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("→ Extracting {} [{}] -> {}", name, range, dest.display())
}

fn failure_summary(report: &BatchReport) -> String {
    report
        .failures
        .iter()
        .map(|f| format!("- {}: {}", f.name(), f.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompts on the terminal: questions and summaries go to stderr so stdout
/// stays clean for piping.
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
            term: Term::stderr(),
        }
    }

    fn ask(&self, question: &str) -> Result<String> {
        self.term.write_line(&style(question).bold().to_string())?;
        Ok(self.term.read_line()?)
    }

    fn show(&self, title: String, message: &str) -> Result<()> {
        self.term.write_line(&title)?;
        for line in message.lines() {
            self.term.write_line(&format!("  {}", line))?;
        }
        Ok(())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn pick_sources(&mut self) -> Result<Vec<PathBuf>> {
        self.term.write_line(
            &style("Select one or more PDF files (one path per line, empty line to finish):")
                .bold()
                .to_string(),
        )?;

        let mut sources = Vec::new();
        loop {
            let line = self.term.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            sources.push(PathBuf::from(line));
        }
        Ok(sources)
    }

    fn pick_output_dir(&mut self) -> Result<Option<PathBuf>> {
        let answer = self.ask("Select output directory:")?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }

    fn ask_range(&mut self) -> Result<Option<String>> {
        // Not trimmed: a blank-looking answer is handed to the parser.
        let answer = self.ask("Enter page range (e.g. 10-25):")?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    fn progress(&mut self, line: &str) -> Result<()> {
        Ok(self.term.write_line(line)?)
    }

    fn show_info(&mut self, title: &str, message: &str) -> Result<()> {
        self.show(style(title).green().bold().to_string(), message)
    }

    fn show_warning(&mut self, title: &str, message: &str) -> Result<()> {
        self.show(style(title).yellow().bold().to_string(), message)
    }

    fn show_error(&mut self, title: &str, message: &str) -> Result<()> {
        self.show(style(title).red().bold().to_string(), message)
    }
}
