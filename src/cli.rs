use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfrange")]
#[command(about = "Extract the same page range from one or more PDFs")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a page range from each input into an output directory
    #[command(alias = "slice")]
    Extract {
        /// PDF files (or directories containing PDFs) to extract from
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// First page to extract (1-indexed)
        #[arg(short, long)]
        start: u32,

        /// Last page to extract, inclusive; clamped to each document's length
        #[arg(short, long)]
        end: u32,

        /// Directory for the extracted files (created if missing)
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Print the written paths as JSON instead of progress lines
        #[arg(long)]
        json: bool,
    },

    /// Prompt for files, output directory and page range (default)
    Interactive,

    /// Run as MCP server over stdio
    Mcp,
}
