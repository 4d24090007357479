// smudge-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection};
use std::sync::{Arc, Mutex};

// Imports Hexagonaux
use crate::error::SmudgeError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::connector::WarehouseConnector;

pub struct DuckDBConnector {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBConnector {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, SmudgeError> {
        self.conn.lock().map_err(|_| {
            SmudgeError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "DuckDB Mutex Poisoned",
            )))
        })
    }
}

#[async_trait]
impl WarehouseConnector for DuckDBConnector {
    async fn execute(&self, query: &str) -> Result<(), SmudgeError> {
        let conn = self.lock()?;
        conn.execute_batch(query).map_err(|e| {
            SmudgeError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
        })
    }

    async fn query_scalar(&self, query: &str) -> Result<u64, SmudgeError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(query).map_err(|e| {
            SmudgeError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
        })?;

        let mut rows = stmt.query([]).map_err(|e| {
            SmudgeError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
        })?;

        let row = rows
            .next()
            .map_err(|e| {
                SmudgeError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
            })?
            .ok_or_else(|| SmudgeError::InternalError("No scalar value returned".into()))?;

        let value: u64 = row.get(0).map_err(|e| {
            SmudgeError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(e)))
        })?;

        Ok(value)
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}
