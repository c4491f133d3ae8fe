use anyhow::Result;
use clap::Parser;
use pdfrange::cli::{Cli, Commands};
use pdfrange::commands::{self, interactive::TerminalPrompter};
use pdfrange::{logging, mcp};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Mcp) => {
            mcp::run_server().await?;
        }
        Some(Commands::Extract {
            inputs,
            start,
            end,
            output_dir,
            json,
        }) => {
            let options = commands::extract::ExtractOptions {
                start,
                end,
                output_dir,
                json,
            };
            commands::extract::run(&inputs, &options)?;
        }
        Some(Commands::Interactive) | None => {
            commands::interactive::run(&mut TerminalPrompter::new())?;
        }
    }

    Ok(())
}
