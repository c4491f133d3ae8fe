use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::batch::{extract_each, BatchReport};
use crate::page_range::PageRange;
use crate::pdf::PdfDocument;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfExtractRangeRequest {
    #[schemars(description = "Paths to the source PDF files")]
    pub paths: Vec<String>,
    #[schemars(description = "Inclusive page range, e.g. '10-25'")]
    pub range: String,
    #[schemars(description = "Directory for the extracted files (created if missing)")]
    pub output_dir: String,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Get the number of pages in a PDF")]
    fn pdf_page_count(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match page_count(&path) {
            Ok(result) => to_json(&result),
            Err(e) => format!("Error: {:#}", e),
        }
    }

    #[tool(description = "Extract the same inclusive page range (e.g. '10-25') from each PDF into an output directory. \
                          Output files are named '<stem>_pages_<start>-<end>.pdf'. Ranges past the end of a document are clamped.")]
    fn pdf_extract_range(&self, Parameters(req): Parameters<PdfExtractRangeRequest>) -> String {
        match extract_range(&req) {
            Ok(report) => to_json(&report),
            Err(e) => format!("Error: {:#}", e),
        }
    }
}

fn page_count(path: &str) -> Result<PageCountResult> {
    let doc = PdfDocument::open(path)?;
    Ok(PageCountResult {
        path: path.to_string(),
        page_count: doc.page_count(),
    })
}

fn extract_range(req: &PdfExtractRangeRequest) -> Result<BatchReport> {
    let range = PageRange::parse(&req.range)?;
    let sources: Vec<PathBuf> = req.paths.iter().map(PathBuf::from).collect();
    Ok(extract_each(
        &sources,
        range,
        Path::new(&req.output_dir),
        &mut |_, _| {},
    ))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Error: {}", e))
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageCountResult {
    pub path: String,
    pub page_count: u32,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page range extraction. Use pdf_page_count to see how long a document is, \
                 and pdf_extract_range to write the same page range of one or more PDFs to new files."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
