use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `rna` binary.
#[derive(Debug, Parser)]
#[command(
    name = "rna",
    version,
    about = "Renal Audit - compare label data against USDA lab truth"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search USDA FoodData Central for candidate products
    Search(SearchArgs),
    /// OCR a label photo and extract structured label data
    Scan(ScanArgs),
    /// Audit label data against the USDA reference and print the report
    Audit(AuditArgs),
    /// Audit, then push the finalized record to the audit database
    Push(AuditArgs),
}

#[derive(Debug, clap::Args)]
pub struct SearchArgs {
    /// Search term (product name, brand, etc.)
    pub query: String,

    /// Max candidates to show
    #[arg(short, long, default_value_t = 5)]
    pub limit: usize,
}

#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Path to a label photo (JPEG)
    pub image: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct AuditArgs {
    /// FDC id of the USDA reference product (from `rna search`)
    #[arg(long)]
    pub fdc_id: Option<u64>,

    /// Path to a label-data JSON file ("Product Name", "Serving Size",
    /// one key per nutrient; null for anything unreadable)
    #[arg(long, conflicts_with = "image")]
    pub label: Option<PathBuf>,

    /// Path to a label photo to scan for the label side
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Skip ingredient trigger analysis
    #[arg(long)]
    pub no_triggers: bool,
}
