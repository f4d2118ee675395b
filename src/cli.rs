use clap::Parser;
use std::path::PathBuf;

/// Visualize CycloneDX AI-BOM documents as an interactive HTML graph
#[derive(Parser, Debug)]
#[command(name = "ai-bom-visualizer")]
#[command(version)]
#[command(
    about = "ai-bom-visualizer - turn a CycloneDX AI-BOM into a self-contained HTML graph viewer",
    long_about = "ai-bom-visualizer - turn a CycloneDX AI-BOM into a self-contained HTML graph viewer.\n\n\
                  Reads the AI-BOM from stdin (e.g. `snyk aibom --json | ai-bom-visualizer`) or from \
                  --file, writes the viewer, and prints its path on stdout."
)]
pub struct Args {
    /// Read the AI-BOM from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write the viewer to this path (defaults to a new file in the temp directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Open the viewer in the default browser after writing it
    #[arg(long)]
    pub view: bool,

    /// Path to config file (auto-discovers ai-bom-visualizer.config.yml if not specified)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Title of the viewer page
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Seconds to wait for stdin to close (0 waits forever)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
