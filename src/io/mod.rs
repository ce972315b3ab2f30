pub mod output;

pub use output::{
    create_writer, EstimateReport, HtmlWriter, JsonWriter, MarkdownWriter, OutputFormat,
    OutputWriter, ReportKind, TerminalWriter,
};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
