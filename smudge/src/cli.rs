// smudge/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smudge")]
#[command(about = "The Messy Customer Dataset Generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🔧 Generates the messy customer dataset (CSV + quality report)
    Generate {
        /// Project directory (where smudge.yaml lives)
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Output CSV path
        #[arg(long, short, default_value = "data/messy_customers.csv")]
        output: PathBuf,

        /// Override the configured target record count
        #[arg(long)]
        count: Option<usize>,

        /// Override the configured RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the quality report as JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// 📊 Analyzes an existing dataset CSV and prints its quality report
    Analyze {
        /// Dataset CSV to analyze
        #[arg(long, short)]
        input: PathBuf,

        /// Print the quality report as JSON instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// 🚚 Loads the dataset CSV into the warehouse (idempotent full replace)
    Load {
        /// Dataset CSV to load
        #[arg(long, short, default_value = "data/messy_customers.csv")]
        input: PathBuf,

        /// Path to the DuckDB database file
        #[arg(long, default_value = "smudge_db.duckdb")]
        db_path: String,

        /// Destination table
        #[arg(long, default_value = "raw_customers")]
        table: String,

        /// Pipeline name recorded in the run metadata
        #[arg(long, default_value = "ingest_csv")]
        pipeline: String,
    },

    /// 🔍 Inspects a warehouse table (schema + sample rows)
    Inspect {
        /// Path to the DuckDB database file
        #[arg(long, default_value = "smudge_db.duckdb")]
        db_path: String,

        /// Table name to inspect
        #[arg(long, short, default_value = "raw_customers")]
        table: String,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}
