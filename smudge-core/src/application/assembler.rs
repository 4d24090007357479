// smudge-core/src/application/assembler.rs
//
// Orchestrates the generation loop: N unique records (clean factory +
// injector), then N duplicates derived from whatever is already in the
// collection, then one uniform shuffle. Single-threaded and fully
// sequential; all randomness flows through the one seeded RNG, which is
// what makes a run reproducible.

use crate::domain::customer::{CreatedAt, CustomerRecord, fresh_customer_id};
use crate::domain::error::DomainError;
use crate::domain::quality::duplicates;
use crate::domain::quality::injector::DefectInjector;
use crate::domain::quality::rules::QualityRules;
use crate::ports::identity::IdentitySource;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

/// Unique/duplicate split for a target size: `floor(T * (1 - r))` unique
/// records, the remainder duplicate-derived. A duplicate needs a source
/// record, so at least one unique record is always generated.
pub fn split_counts(target: usize, duplicate_rate: f64) -> (usize, usize) {
    let mut n_unique = (target as f64 * (1.0 - duplicate_rate)).floor() as usize;
    if n_unique == 0 && target > 0 {
        n_unique = 1;
    }
    (n_unique, target - n_unique)
}

/// Builds one uncorrupted record: fresh identifier + fabricated identity.
pub fn new_clean_record<S: IdentitySource + ?Sized>(
    identities: &S,
    rng: &mut StdRng,
) -> CustomerRecord {
    let customer_id = fresh_customer_id(rng);
    let identity = identities.identity(rng);
    CustomerRecord {
        customer_id,
        first_name: identity.first_name,
        last_name: identity.last_name,
        email: Some(identity.email),
        phone: Some(identity.phone),
        address: identity.address,
        city: identity.city,
        country: identity.country,
        created_at: CreatedAt::Timestamp(identity.created_at),
    }
}

/// Generates the full messy dataset. Validates the configuration eagerly;
/// past that point generation is total and cannot fail.
pub fn generate_dataset<S: IdentitySource + ?Sized>(
    rules: &QualityRules,
    target: usize,
    identities: &S,
    rng: &mut StdRng,
) -> Result<Vec<CustomerRecord>, DomainError> {
    rules.validate()?;
    if target == 0 {
        return Err(DomainError::InvalidTargetCount(0));
    }

    let (n_unique, n_duplicates) = split_counts(target, rules.duplicate_rate);
    info!(target, n_unique, n_duplicates, "Generating messy dataset");

    let injector = DefectInjector::new(rules);
    let mut customers: Vec<CustomerRecord> = Vec::with_capacity(target);

    for i in 0..n_unique {
        let mut customer = new_clean_record(identities, rng);
        injector.inject(&mut customer, rng);
        customers.push(customer);

        if (i + 1) % 1000 == 0 {
            debug!(done = i + 1, total = n_unique, "unique records generated");
        }
    }

    for i in 0..n_duplicates {
        // Uniform pick over the CURRENT collection: later duplicates may
        // derive from earlier duplicates.
        let source_idx = rng.gen_range(0..customers.len());
        let mut twin = duplicates::derive(&customers[source_idx], identities, rng);
        injector.inject(&mut twin, rng);
        customers.push(twin);

        if (i + 1) % 100 == 0 {
            debug!(done = i + 1, total = n_duplicates, "duplicates derived");
        }
    }

    // The one and only reordering operation.
    customers.shuffle(rng);

    Ok(customers)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::quality::analyzer::QualityAnalyzer;
    use crate::infrastructure::identity::PoolIdentitySource;
    use chrono::NaiveDateTime;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn source(rules: &QualityRules) -> PoolIdentitySource {
        PoolIdentitySource::new(
            &rules.email_domains,
            &rules.phone_prefixes,
            NaiveDateTime::default(),
        )
    }

    #[test]
    fn test_split_counts() {
        assert_eq!(split_counts(100, 0.15), (85, 15));
        assert_eq!(split_counts(5000, 0.15), (4250, 750));
        assert_eq!(split_counts(100, 0.0), (100, 0));
        // A duplicate always needs a source record.
        assert_eq!(split_counts(10, 1.0), (1, 9));
    }

    #[test]
    fn test_split_counts_rounding_tolerance() {
        for target in [1usize, 7, 99, 100, 101, 5000] {
            for rate in [0.0, 0.1, 0.15, 0.33, 0.5] {
                let (_, dup) = split_counts(target, rate);
                let expected = (target as f64 * rate).round();
                assert!(
                    (dup as f64 - expected).abs() <= 1.0,
                    "target={target} rate={rate} dup={dup}"
                );
            }
        }
    }

    #[test]
    fn test_dataset_size_is_exact() {
        let rules = QualityRules::default();
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(42);
        for target in [1usize, 13, 100, 500] {
            let dataset = generate_dataset(&rules, target, &identities, &mut rng)
                .unwrap();
            assert_eq!(dataset.len(), target);
        }
    }

    #[test]
    fn test_identifiers_are_globally_unique() {
        let rules = QualityRules::default();
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = generate_dataset(&rules, 1000, &identities, &mut rng)
            .unwrap();
        let ids: HashSet<_> = dataset.iter().map(|r| r.customer_id.as_str()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let rules = QualityRules::default();
        let identities = source(&rules);

        let mut rng1 = StdRng::seed_from_u64(7);
        let first = generate_dataset(&rules, 300, &identities, &mut rng1).unwrap();

        let mut rng2 = StdRng::seed_from_u64(7);
        let second = generate_dataset(&rules, 300, &identities, &mut rng2).unwrap();

        // Same records, same order, bit-for-bit.
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_dataset() {
        let rules = QualityRules::default();
        let identities = source(&rules);
        let mut rng1 = StdRng::seed_from_u64(1);
        let mut rng2 = StdRng::seed_from_u64(2);
        let a = generate_dataset(&rules, 50, &identities, &mut rng1).unwrap();
        let b = generate_dataset(&rules, 50, &identities, &mut rng2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_target_is_rejected() {
        let rules = QualityRules::default();
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_dataset(&rules, 0, &identities, &mut rng),
            Err(DomainError::InvalidTargetCount(0))
        ));
    }

    #[test]
    fn test_invalid_rules_are_rejected_before_generation() {
        let rules = QualityRules {
            special_chars_rate: 2.0,
            ..QualityRules::default()
        };
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_dataset(&rules, 10, &identities, &mut rng).is_err());
    }

    /// Empirical convergence of the defect rates at 5,000 records
    /// (±2% absolute, per the sampling-tolerance law). Duplicates are
    /// disabled so each record sees the injector exactly once from a clean
    /// state.
    #[test]
    fn test_defect_rates_converge() {
        let rules = QualityRules {
            duplicate_rate: 0.0,
            ..QualityRules::default()
        };
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = generate_dataset(&rules, 5000, &identities, &mut rng)
            .unwrap();
        let report = QualityAnalyzer::analyze(&dataset);

        assert!((report.null_email_rate - 0.05).abs() < 0.02, "{report:?}");
        assert!((report.null_phone_rate - 0.10).abs() < 0.02, "{report:?}");
        assert!((report.spaced_name_rate - 0.20).abs() < 0.02, "{report:?}");

        let special = dataset
            .iter()
            .filter(|r| r.first_name.contains('™'))
            .count() as f64
            / dataset.len() as f64;
        assert!((special - 0.08).abs() < 0.02, "special chars rate {special}");
    }

    /// Casing convergence, isolated from the other name rules. Upper and
    /// lower are detectable against the title-cased name pools; the title
    /// variant is a no-op on them, so the visible fraction is 2/3 of the
    /// configured 0.30.
    #[test]
    fn test_mixed_case_rate_converges() {
        let rules = QualityRules {
            duplicate_rate: 0.0,
            extra_spaces_rate: 0.0,
            special_chars_rate: 0.0,
            ..QualityRules::default()
        };
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = generate_dataset(&rules, 5000, &identities, &mut rng).unwrap();

        let recased = dataset
            .iter()
            .filter(|r| {
                r.first_name == r.first_name.to_uppercase()
                    || r.first_name == r.first_name.to_lowercase()
            })
            .count() as f64
            / dataset.len() as f64;
        assert!((recased - 0.20).abs() < 0.02, "mixed-case rate {recased}");
    }

    #[test]
    fn test_every_created_at_is_textual_after_assembly() {
        let rules = QualityRules::default();
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(5);
        let dataset = generate_dataset(&rules, 200, &identities, &mut rng)
            .unwrap();
        assert!(
            dataset
                .iter()
                .all(|r| matches!(r.created_at, CreatedAt::Text(_)))
        );
    }

    #[test]
    fn test_dataset_mixes_date_layouts() {
        let rules = QualityRules::default();
        let identities = source(&rules);
        let mut rng = StdRng::seed_from_u64(5);
        let dataset = generate_dataset(&rules, 500, &identities, &mut rng)
            .unwrap();

        // Four layouts configured; with 500 records each should appear.
        let iso = dataset.iter().filter(|r| match &r.created_at {
            CreatedAt::Text(s) => s.len() == 10 && s.as_bytes()[4] == b'-',
            CreatedAt::Timestamp(_) => false,
        });
        let slashed = dataset.iter().filter(|r| match &r.created_at {
            CreatedAt::Text(s) => s.contains('/'),
            CreatedAt::Timestamp(_) => false,
        });
        assert!(iso.count() > 0);
        assert!(slashed.count() > 0);
    }
}
