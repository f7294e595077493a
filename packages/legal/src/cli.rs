//! Command-line interface for the renderer.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    validate_document_id, validate_threshold, RenderOptions, DEFAULT_OUTPUT_DIR,
    DEFAULT_SOURCE_DIR, TEXT_WRAP_WIDTH,
};
use crate::error::{LegalError, Result};
use crate::loader::load_document;
use crate::preview::format_document;
use crate::renderer::render_document;
use crate::types::DocumentKind;
use crate::yaml::save_yaml;

/// Talko legal documents renderer.
#[derive(Parser)]
#[command(name = "talko-legal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the legal documents of the site.
    List,

    /// Render documents to YAML display blocks.
    Render {
        /// Document ids (privacy, agreement, offer); all when omitted
        ids: Vec<String>,

        /// Directory holding the plain-text sources
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        source: PathBuf,

        /// Output directory for YAML files
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Minimum share of numbered lines for list rendering
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Print a rendered document to the terminal.
    Inspect {
        /// Document id (privacy, agreement, offer)
        id: String,

        /// Directory holding the plain-text sources
        #[arg(short, long, default_value = DEFAULT_SOURCE_DIR)]
        source: PathBuf,

        /// Wrap width
        #[arg(short, long, default_value_t = TEXT_WRAP_WIDTH)]
        width: usize,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            list_command();
            Ok(())
        }
        Commands::Render {
            ids,
            source,
            output,
            threshold,
        } => render_command(&ids, &source, &output, threshold),
        Commands::Inspect { id, source, width } => inspect_command(&id, &source, width),
    }
}

/// Resolve document ids, defaulting to the whole catalog.
fn resolve_kinds(ids: &[String]) -> Result<Vec<DocumentKind>> {
    if ids.is_empty() {
        return Ok(DocumentKind::ALL.to_vec());
    }
    ids.iter().map(|id| validate_document_id(id)).collect()
}

/// Ensure the source directory exists before loading anything.
fn check_source_dir(source: &Path) -> Result<()> {
    if !source.is_dir() {
        return Err(LegalError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Source directory does not exist: {}", source.display()),
        )));
    }
    Ok(())
}

/// Execute the list command.
fn list_command() {
    for kind in DocumentKind::ALL {
        println!(
            "{:<10} {}  {}",
            style(kind.id()).cyan(),
            kind.title(),
            style(kind.file_name()).dim()
        );
    }
}

/// Execute the render command.
fn render_command(
    ids: &[String],
    source: &Path,
    output: &Path,
    threshold: Option<f64>,
) -> Result<()> {
    // Validate inputs before touching the filesystem
    let kinds = resolve_kinds(ids)?;
    let mut options = RenderOptions::default();
    if let Some(threshold) = threshold {
        validate_threshold(threshold)?;
        options = options.with_list_threshold(threshold);
    }
    check_source_dir(source)?;

    println!(
        "{} {} document(s) from {}",
        style("Rendering").bold(),
        style(kinds.len()).cyan(),
        style(source.display()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let mut saved = Vec::new();
    for kind in kinds {
        pb.set_message(format!("Rendering {}...", kind.id()));

        let result = load_document(source, kind).and_then(|raw| {
            let doc = render_document(&raw, &options);
            let path = save_yaml(&doc, output)?;
            Ok((doc, path))
        });
        let (doc, path) = match result {
            Ok(ok) => ok,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        saved.push((kind, doc.blocks.len(), path));
    }

    pb.finish_and_clear();

    for (kind, blocks, path) in saved {
        println!(
            "  {} {} ({} blocks)",
            style(format!("{:<10}", kind.id())).cyan(),
            path.display(),
            blocks
        );
    }
    println!();
    println!("{} {}", style("Saved to:").green().bold(), output.display());

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(id: &str, source: &Path, width: usize) -> Result<()> {
    let kind = validate_document_id(id)?;
    check_source_dir(source)?;

    let raw = load_document(source, kind)?;
    let doc = render_document(&raw, &RenderOptions::default());

    println!("{}", format_document(&doc, width));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_render_defaults() {
        let cli = Cli::parse_from(["talko-legal", "render"]);

        let Commands::Render {
            ids,
            source,
            output,
            threshold,
        } = cli.command
        else {
            panic!("expected render command");
        };
        assert!(ids.is_empty());
        assert_eq!(source, PathBuf::from(DEFAULT_SOURCE_DIR));
        assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(threshold.is_none());
    }

    #[test]
    fn test_cli_parse_render_with_ids() {
        let cli = Cli::parse_from([
            "talko-legal",
            "render",
            "privacy",
            "offer",
            "--threshold",
            "0.5",
        ]);

        let Commands::Render { ids, threshold, .. } = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(ids, vec!["privacy".to_string(), "offer".to_string()]);
        assert_eq!(threshold, Some(0.5));
    }

    #[test]
    fn test_cli_parse_inspect() {
        let cli = Cli::parse_from(["talko-legal", "inspect", "agreement", "--width", "60"]);

        let Commands::Inspect { id, width, .. } = cli.command else {
            panic!("expected inspect command");
        };
        assert_eq!(id, "agreement");
        assert_eq!(width, 60);
    }

    #[test]
    fn test_resolve_kinds() {
        assert_eq!(resolve_kinds(&[]).unwrap().len(), 3);
        assert_eq!(
            resolve_kinds(&["offer".to_string()]).unwrap(),
            vec![DocumentKind::Offer]
        );
        assert!(resolve_kinds(&["refunds".to_string()]).is_err());
    }
}
