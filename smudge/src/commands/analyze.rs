// smudge/src/commands/analyze.rs
//
// USE CASE: Analyze an existing dataset CSV.

use std::path::PathBuf;

use anyhow::Context;
use smudge_core::domain::quality::QualityAnalyzer;
use smudge_core::infrastructure::csv::read_dataset;

use super::report;

pub fn execute(input: PathBuf, json: bool) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!(
            "❌ Dataset not found at: {:?}\n👉 Have you run 'smudge generate'?",
            input
        );
    }

    println!("📂 Reading {:?}...", input);
    let dataset =
        read_dataset(&input).with_context(|| format!("Failed to read dataset from {:?}", input))?;

    let quality = QualityAnalyzer::analyze(&dataset);
    if json {
        println!("{}", serde_json::to_string_pretty(&quality)?);
    } else {
        report::print_report(&quality);
    }

    Ok(())
}
