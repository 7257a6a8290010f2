//! Command-line interface for the parser.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::block::Block;
use crate::error::Result;
use crate::parser::parse_document;
use crate::render::render_document;
use crate::types::{DocumentMetadata, DocumentRoot};

/// GDPR parser - build the nested document model from an extracted block dump.
#[derive(Parser)]
#[command(name = "gdpr-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an extracted block sequence into the document JSON.
    Parse {
        /// JSON file with the ordered block sequence
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with document header fields (default: the GDPR header)
        #[arg(short, long)]
        metadata: Option<PathBuf>,
    },

    /// Render a document JSON as a cross-referenced outline.
    Render {
        /// Document JSON produced by `parse`
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            metadata,
        } => parse_command(&input, output.as_deref(), metadata.as_deref()),
        Commands::Render { input, output } => render_command(&input, output.as_deref()),
    }
}

/// Execute the parse command.
fn parse_command(input: &Path, output: Option<&Path>, metadata: Option<&Path>) -> Result<()> {
    let blocks: Vec<Block> = serde_json::from_str(&fs::read_to_string(input)?)?;

    let metadata = match metadata {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => DocumentMetadata::gdpr(),
    };

    let document = parse_document(&blocks, metadata)?;

    // Summary goes to stderr so stdout stays clean for piped JSON
    eprintln!(
        "{} {} ({})",
        style("Parsed").bold(),
        style(&document.title).cyan(),
        document.regulation
    );
    eprintln!("  Chapters: {}", document.chapters.len());
    eprintln!("  Recitals: {}", document.recitals.len());
    eprintln!("  Citations: {}", document.citations.len());

    let json = serde_json::to_string_pretty(&document)?;
    write_output(output, &json)
}

/// Execute the render command.
fn render_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let document: DocumentRoot = serde_json::from_str(&fs::read_to_string(input)?)?;
    let text = render_document(&document);
    write_output(output, &text)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
