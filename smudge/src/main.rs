// smudge/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug smudge generate ... pour voir les détails
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: GENERATE DATASET ---
        Commands::Generate {
            project_dir,
            output,
            count,
            seed,
            json,
        } => commands::generate::execute(project_dir, output, count, seed, json)?,

        // --- USE CASE: ANALYZE EXISTING CSV ---
        Commands::Analyze { input, json } => commands::analyze::execute(input, json)?,

        // --- USE CASE: LOAD INTO WAREHOUSE ---
        Commands::Load {
            input,
            db_path,
            table,
            pipeline,
        } => commands::load::execute(input, db_path, table, pipeline).await?,

        // --- USE CASE: INSPECT WAREHOUSE TABLE ---
        Commands::Inspect {
            db_path,
            table,
            limit,
        } => commands::inspect::execute(db_path, table, limit)?,
    }

    Ok(())
}
