// smudge-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmudgeError {
    // --- ERREURS DU DOMAINE (Rules, configuration rejection) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Parsing, Database) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- LOADER (single externally visible failure kind) ---
    #[error("Load failed: {0}")]
    LoadFailed(String),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementations to avoid duplicate enum variants but keep ergonomics
impl From<std::io::Error> for SmudgeError {
    fn from(err: std::io::Error) -> Self {
        SmudgeError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for SmudgeError {
    fn from(err: duckdb::Error) -> Self {
        SmudgeError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
    }
}
