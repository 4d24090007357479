// smudge-core/src/infrastructure/config/mod.rs

use crate::domain::quality::rules::QualityRules;
use crate::infrastructure::error::InfrastructureError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_target_count")]
    pub target_count: usize,

    // Seed pour reproductibilité
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Reference instant for fabricated timestamps ("%Y-%m-%d %H:%M:%S").
    /// Fixed rather than wall-clock so two runs with the same seed produce
    /// the same dataset.
    #[serde(default = "default_anchor_date")]
    pub anchor_date: String,

    #[serde(default)]
    pub rules: QualityRules,
}

fn default_target_count() -> usize {
    5000
}

fn default_seed() -> u64 {
    42
}

fn default_anchor_date() -> String {
    "2025-01-01 00:00:00".to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            seed: default_seed(),
            anchor_date: default_anchor_date(),
            rules: QualityRules::default(),
        }
    }
}

impl GenerationConfig {
    pub fn parse_anchor(&self) -> Result<NaiveDateTime, InfrastructureError> {
        NaiveDateTime::parse_from_str(&self.anchor_date, "%Y-%m-%d %H:%M:%S").map_err(|e| {
            InfrastructureError::Config(format!(
                "anchor_date '{}' is not a '%Y-%m-%d %H:%M:%S' instant: {}",
                self.anchor_date, e
            ))
        })
    }
}

/// Loads the generation config from `<dir>/smudge.yaml` (fallback:
/// `smudge_conf.yaml`). A missing file is not an error: the defaults
/// produce the standard 5k dataset.
pub fn load_generation_config(dir: &Path) -> Result<GenerationConfig, InfrastructureError> {
    let candidates = ["smudge.yaml", "smudge_conf.yaml"];

    let mut config = match candidates.iter().map(|f| dir.join(f)).find(|p| p.exists()) {
        Some(path) => {
            info!(path = ?path, "Loading generation config");
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!(dir = ?dir, "No config file found, using defaults");
            GenerationConfig::default()
        }
    };

    // Override via Variables d'Environnement (Pattern 'Layering')
    // Permet de faire: SMUDGE_SEED=7 smudge generate
    apply_env_overrides(&mut config);

    Ok(config)
}

fn apply_env_overrides(config: &mut GenerationConfig) {
    if let Ok(val) = std::env::var("SMUDGE_SEED")
        && let Ok(seed) = val.parse::<u64>()
    {
        info!(old = config.seed, new = seed, "Overriding seed via ENV");
        config.seed = seed;
    }
    if let Ok(val) = std::env::var("SMUDGE_TARGET_COUNT")
        && let Ok(count) = val.parse::<usize>()
    {
        info!(old = config.target_count, new = count, "Overriding target count via ENV");
        config.target_count = count;
    }
}
