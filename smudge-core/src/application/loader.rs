// smudge-core/src/application/loader.rs
//
// Downstream ingestion collaborator: truncate-and-load the generated CSV
// into a warehouse table, then record one run-metadata row. Idempotent full
// replace; on failure the data load is rolled back but a 'failed' metadata
// row is still committed, and the error propagates to the caller (retries
// belong to the caller's policy, never to this function).

use crate::error::SmudgeError;
use crate::ports::connector::WarehouseConnector;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

pub const METADATA_TABLE: &str = "pipeline_metadata";

#[derive(Debug, Clone, Serialize)]
pub struct LoadOutcome {
    pub destination: String,
    pub rows_loaded: u64,
}

pub async fn load_csv_to_warehouse(
    connector: &dyn WarehouseConnector,
    csv_path: &Path,
    destination: &str,
    pipeline_name: &str,
) -> Result<LoadOutcome, SmudgeError> {
    info!(path = ?csv_path, destination, engine = connector.engine_name(), "Loading CSV into warehouse");

    ensure_metadata_table(connector).await?;

    match replace_table(connector, csv_path, destination).await {
        Ok(rows_loaded) => {
            record_run(
                connector,
                pipeline_name,
                destination,
                Some(rows_loaded),
                "success",
                None,
            )
            .await?;
            info!(rows_loaded, destination, "Load committed");
            Ok(LoadOutcome {
                destination: destination.to_string(),
                rows_loaded,
            })
        }
        Err(e) => {
            error!(destination, error = %e, "Load failed, rolling back");
            // Best-effort: if the transaction never opened there is nothing
            // to roll back and DuckDB will complain, which we ignore.
            let _ = connector.execute("ROLLBACK").await;

            // The failure itself must still leave a durable trace.
            record_run(
                connector,
                pipeline_name,
                destination,
                None,
                "failed",
                Some(&e.to_string()),
            )
            .await?;

            Err(SmudgeError::LoadFailed(e.to_string()))
        }
    }
}

/// Full-replace load inside a single transaction. The two provenance
/// columns (`source_file`, `loaded_at`) are appended here, not by the
/// generation core.
async fn replace_table(
    connector: &dyn WarehouseConnector,
    csv_path: &Path,
    destination: &str,
) -> Result<u64, SmudgeError> {
    let source_path = csv_path.to_string_lossy().replace('\'', "''");
    let source_file = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown.csv".to_string())
        .replace('\'', "''");

    connector.execute("BEGIN TRANSACTION").await?;

    // all_varchar: the dataset deliberately mixes date layouts per row, so
    // type sniffing must not get clever on any column.
    connector
        .execute(&format!(
            "CREATE OR REPLACE TABLE \"{destination}\" AS \
             SELECT *, '{source_file}' AS source_file, now() AS loaded_at \
             FROM read_csv_auto('{source_path}', all_varchar = true)"
        ))
        .await?;

    let rows_loaded = connector
        .query_scalar(&format!("SELECT count(*) FROM \"{destination}\""))
        .await?;

    connector.execute("COMMIT").await?;
    Ok(rows_loaded)
}

async fn ensure_metadata_table(connector: &dyn WarehouseConnector) -> Result<(), SmudgeError> {
    connector
        .execute(&format!(
            "CREATE TABLE IF NOT EXISTS \"{METADATA_TABLE}\" ( \
             pipeline_name VARCHAR, \
             destination VARCHAR, \
             rows_loaded BIGINT, \
             run_status VARCHAR, \
             error_message VARCHAR, \
             completed_at TIMESTAMP )"
        ))
        .await
}

async fn record_run(
    connector: &dyn WarehouseConnector,
    pipeline_name: &str,
    destination: &str,
    rows_loaded: Option<u64>,
    status: &str,
    error_message: Option<&str>,
) -> Result<(), SmudgeError> {
    let rows_sql = match rows_loaded {
        Some(rows) => rows.to_string(),
        None => "NULL".to_string(),
    };
    let error_sql = match error_message {
        Some(message) => format!("'{}'", message.replace('\'', "''")),
        None => "NULL".to_string(),
    };

    connector
        .execute(&format!(
            "INSERT INTO \"{METADATA_TABLE}\" VALUES ( \
             '{}', '{}', {}, '{}', {}, now() )",
            pipeline_name.replace('\'', "''"),
            destination.replace('\'', "''"),
            rows_sql,
            status,
            error_sql,
        ))
        .await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::duckdb::DuckDBConnector;
    use anyhow::Result;
    use std::io::Write;

    fn sample_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("messy_customers.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "customer_id,first_name,last_name,email,phone,address,city,country,created_at"
        )
        .unwrap();
        writeln!(file, "id-1,Marie,Dubois,a@b.com,+33 1,1 Rue,Lyon,FR,2024-01-15").unwrap();
        writeln!(file, "id-2,  jack  ,©Taylor,,,3 High St,Leeds,GB,15/01/2024").unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_success_records_metadata() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let csv_path = sample_csv(&dir);
        let connector = DuckDBConnector::new(":memory:")?;

        let outcome =
            load_csv_to_warehouse(&connector, &csv_path, "raw_customers", "ingest_csv").await?;
        assert_eq!(outcome.rows_loaded, 2);

        let rows = connector
            .query_scalar("SELECT count(*) FROM raw_customers")
            .await?;
        assert_eq!(rows, 2);

        // Provenance columns appended by the loader.
        let tagged = connector
            .query_scalar(
                "SELECT count(*) FROM raw_customers \
                 WHERE source_file = 'messy_customers.csv' AND loaded_at IS NOT NULL",
            )
            .await?;
        assert_eq!(tagged, 2);

        let success_runs = connector
            .query_scalar(
                "SELECT count(*) FROM pipeline_metadata \
                 WHERE pipeline_name = 'ingest_csv' AND run_status = 'success' \
                 AND rows_loaded = 2",
            )
            .await?;
        assert_eq!(success_runs, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let csv_path = sample_csv(&dir);
        let connector = DuckDBConnector::new(":memory:")?;

        load_csv_to_warehouse(&connector, &csv_path, "raw_customers", "ingest_csv").await?;
        load_csv_to_warehouse(&connector, &csv_path, "raw_customers", "ingest_csv").await?;

        // Full replace: still 2 rows, but two metadata entries.
        let rows = connector
            .query_scalar("SELECT count(*) FROM raw_customers")
            .await?;
        assert_eq!(rows, 2);
        let runs = connector
            .query_scalar("SELECT count(*) FROM pipeline_metadata")
            .await?;
        assert_eq!(runs, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_failure_rolls_back_and_records_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("nope.csv");
        let connector = DuckDBConnector::new(":memory:")?;

        let result =
            load_csv_to_warehouse(&connector, &missing, "raw_customers", "ingest_csv").await;
        assert!(matches!(result, Err(SmudgeError::LoadFailed(_))));

        // No destination table was left behind...
        assert!(
            connector
                .query_scalar("SELECT count(*) FROM raw_customers")
                .await
                .is_err()
        );

        // ...but the failure left a durable trace.
        let failed_runs = connector
            .query_scalar(
                "SELECT count(*) FROM pipeline_metadata \
                 WHERE run_status = 'failed' AND error_message IS NOT NULL \
                 AND rows_loaded IS NULL",
            )
            .await?;
        assert_eq!(failed_runs, 1);
        Ok(())
    }
}
