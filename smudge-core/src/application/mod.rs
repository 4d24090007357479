// smudge-core/src/application/mod.rs

pub mod assembler;
pub mod loader;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use smudge_core::application::{generate_dataset, load_csv_to_warehouse};`

pub use assembler::{generate_dataset, split_counts};
pub use loader::{LoadOutcome, load_csv_to_warehouse};
