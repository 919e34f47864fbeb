//! Command-line interface for the harvester.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::DEFAULT_OUTPUT_PATH;
use crate::error::{HarvestError, Result};
use crate::export::export_csv;
use crate::extract::ExtractionSchema;
use crate::harvester::harvest_catalog;
use crate::http::Portal;

/// NuBBE Harvester - Export the NuBBE compound catalog as CSV.
#[derive(Parser)]
#[command(name = "nubbe-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest the full compound catalog and export it as CSV.
    Export {
        /// Output file path (default: molecule_structures.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Portal base URL (default: the public NuBBE portal)
        #[arg(long)]
        base_url: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export { output, base_url } => {
            export_command(output.as_deref(), base_url.as_deref())
        }
    }
}

/// Execute the export command.
fn export_command(output: Option<&Path>, base_url: Option<&str>) -> Result<()> {
    let output = output.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_PATH));

    // Validate the destination before any network traffic
    if let Some(dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !dir.is_dir() {
            return Err(HarvestError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", dir.display()),
            )));
        }
    }

    let portal = match base_url {
        Some(base) => Portal::with_base_url(base),
        None => Portal::new(),
    }?;

    println!(
        "{} compound catalog from {}",
        style("Harvesting").bold(),
        style(portal.base_url()).cyan()
    );
    println!();

    let pb = ProgressBar::new(0);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{pos}/{len}] Extracting data ...")
            .expect("valid template"),
    );

    let schema = ExtractionSchema::new();
    let catalog = match harvest_catalog(&portal, &schema, |current, total| {
        pb.set_length(total as u64);
        pb.set_position((current + 1) as u64);
    }) {
        Ok(catalog) => catalog,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();
    println!("  Compounds: {}", style(catalog.len()).green());

    export_csv(&catalog, output)?;

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );

    Ok(())
}
