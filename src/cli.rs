use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alumni-finder")]
#[command(about = "Alumni roster search and match scoring tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose per-record logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search every roster row and score the candidate profiles
    Run {
        /// Alumni roster spreadsheet (.xls/.xlsx)
        #[arg(required = true)]
        roster: PathBuf,

        /// Captured search session JSON to replay
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Output file or directory (default: the roster's directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (xlsx/csv/json)
        #[arg(short, long, default_value = "xlsx")]
        format: ExportFormat,

        /// First spreadsheet row to process (the header is row 1)
        #[arg(long)]
        start_row: Option<u32>,

        /// Last spreadsheet row to process
        #[arg(long)]
        end_row: Option<u32>,

        /// Region hint appended to every search query
        #[arg(long)]
        region: Option<String>,

        /// Target job position for the latest-job bonus point
        #[arg(long)]
        job_position: Option<String>,

        /// Target geolocation for the latest-job bonus point
        #[arg(long)]
        geolocation: Option<String>,

        /// Split the roster into this many contiguous shards, each handled
        /// by an independent sequential worker
        #[arg(long)]
        workers: Option<usize>,

        /// Disable the random pause between rows
        #[arg(long)]
        no_pacing: bool,

        /// Synonym table JSON (overrides the configured path)
        #[arg(long)]
        synonyms: Option<PathBuf>,

        /// Credential store JSON (overrides the configured path)
        #[arg(long)]
        credentials: Option<PathBuf>,
    },

    /// Validate a roster and summarize its records
    Inspect {
        /// Alumni roster spreadsheet (.xls/.xlsx)
        #[arg(required = true)]
        roster: PathBuf,

        /// First spreadsheet row to inspect
        #[arg(long)]
        start_row: Option<u32>,

        /// Last spreadsheet row to inspect
        #[arg(long)]
        end_row: Option<u32>,
    },

    /// Show or edit configuration
    Config {
        /// Set the default search region
        #[arg(long)]
        set_region: Option<String>,

        /// Set the synonym table path
        #[arg(long)]
        set_synonyms: Option<PathBuf>,

        /// Show the current configuration
        #[arg(long)]
        show: bool,
    },

    /// Manage scraper login credentials
    Credentials {
        /// Add a credential interactively
        #[arg(long)]
        add: bool,

        /// List stored credentials
        #[arg(long)]
        list: bool,

        /// Credential store JSON (overrides the configured path)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown format: {}. Use xlsx, csv, or json", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
