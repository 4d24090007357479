// smudge-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)] // On autorise le manque de doc pour le moment

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contracts at the seams (IdentitySource, WarehouseConnector)
pub mod ports;

// 2. Domain (Cœur du métier)
// Customer entity, quality rule set, defect injector, duplicate
// deriver, quality analyzer. Depends on NOTHING else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Technical implementations (identity pools, YAML config, CSV sink, DuckDB)
// Depends on the Domain and the Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (Dataset assembly, warehouse loading)
// Depends on the Domain, the Infra and the Ports.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Permet d'importer l'erreur principale facilement : use smudge_core::SmudgeError;
pub use error::SmudgeError;
