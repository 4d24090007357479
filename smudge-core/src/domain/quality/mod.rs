// smudge-core/src/domain/quality/mod.rs

pub mod analyzer;
pub mod duplicates;
pub mod injector;
pub mod rules;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use smudge_core::domain::quality::{QualityAnalyzer, QualityRules};`

pub use analyzer::{QualityAnalyzer, QualityReport};
pub use injector::DefectInjector;
pub use rules::QualityRules;
