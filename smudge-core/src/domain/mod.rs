pub mod customer;
pub mod error;
pub mod quality;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use customer::{CreatedAt, CustomerRecord};
pub use error::DomainError;
