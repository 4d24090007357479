// smudge-core/src/ports/connector.rs
//
// What the loader needs from a warehouse, without knowing which engine
// provides it. The shape of the socket, not the power plant behind it.

use crate::error::SmudgeError;
use async_trait::async_trait;

#[async_trait]
pub trait WarehouseConnector: Send + Sync {
    async fn execute(&self, query: &str) -> Result<(), SmudgeError>;

    /// Runs a query expected to return a single numeric value (e.g. count(*)).
    async fn query_scalar(&self, query: &str) -> Result<u64, SmudgeError>;

    fn engine_name(&self) -> &str;
}
