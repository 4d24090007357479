// smudge/src/commands/generate.rs
//
// USE CASE: Generate the messy customer dataset (CSV + quality report).

use std::path::PathBuf;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use smudge_core::application::generate_dataset;
use smudge_core::domain::quality::QualityAnalyzer;
use smudge_core::infrastructure::config::load_generation_config;
use smudge_core::infrastructure::csv::write_dataset;
use smudge_core::infrastructure::identity::PoolIdentitySource;

use super::report;

pub fn execute(
    project_dir: PathBuf,
    output: PathBuf,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let mut config = load_generation_config(&project_dir)
        .with_context(|| format!("Failed to load generation config from {:?}", project_dir))?;

    // CLI flags win over file and ENV values
    if let Some(count) = count {
        config.target_count = count;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }
    println!(
        "   Target: {} customers (seed {})",
        config.target_count, config.seed
    );

    // B. Wire the identity source and the seeded RNG
    let anchor = config.parse_anchor()?;
    let identities = PoolIdentitySource::new(
        &config.rules.email_domains,
        &config.rules.phone_prefixes,
        anchor,
    );
    let mut rng = StdRng::seed_from_u64(config.seed);

    // C. Generate (Domain + Application)
    println!("🔧 Generating messy dataset...");
    let dataset = generate_dataset(&config.rules, config.target_count, &identities, &mut rng)?;

    // D. Persist
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    write_dataset(&output, &dataset)
        .with_context(|| format!("Failed to write dataset to {:?}", output))?;
    println!("💾 Wrote {} records to {:?}", dataset.len(), output);

    // E. Report
    let quality = QualityAnalyzer::analyze(&dataset);
    if json {
        println!("{}", serde_json::to_string_pretty(&quality)?);
    } else {
        report::print_report(&quality);
    }

    println!("\n✨ SUCCESS! Dataset generated in {:.2?}", start.elapsed());
    Ok(())
}
