pub mod connector;
pub mod identity;

pub use connector::WarehouseConnector;
pub use identity::{Identity, IdentitySource};
