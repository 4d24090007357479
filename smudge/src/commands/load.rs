// smudge/src/commands/load.rs
//
// USE CASE: Load the dataset CSV into the warehouse.
// One automatic retry after a fixed delay; past that the failure is final
// (a 'failed' row already sits in pipeline_metadata for each attempt).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use smudge_core::application::load_csv_to_warehouse;
use smudge_core::infrastructure::adapters::duckdb::DuckDBConnector;

const RETRY_DELAY: Duration = Duration::from_secs(2);

pub async fn execute(
    input: PathBuf,
    db_path: String,
    table: String,
    pipeline: String,
) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!(
            "❌ Dataset not found at: {:?}\n👉 Have you run 'smudge generate'?",
            input
        );
    }

    println!("🚚 Loading {:?} into '{}' ({})...", input, table, db_path);
    let connector = DuckDBConnector::new(&db_path)
        .with_context(|| format!("Failed to initialize DuckDB at {}", db_path))?;

    let outcome = match load_csv_to_warehouse(&connector, &input, &table, &pipeline).await {
        Ok(outcome) => outcome,
        Err(first) => {
            eprintln!("⚠️  Load failed ({first}), retrying in {RETRY_DELAY:?}...");
            tokio::time::sleep(RETRY_DELAY).await;

            match load_csv_to_warehouse(&connector, &input, &table, &pipeline).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("\n💥 LOAD FAILED after retry: {e}");
                    std::process::exit(1);
                }
            }
        }
    };

    println!(
        "\n✨ SUCCESS! {} rows loaded into '{}'",
        outcome.rows_loaded, outcome.destination
    );
    Ok(())
}
