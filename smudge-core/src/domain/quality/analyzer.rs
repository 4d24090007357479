// smudge-core/src/domain/quality/analyzer.rs
//
// Descriptive statistics over a finished collection. Read-only and
// idempotent: running it twice on the same data yields the same report.

use crate::domain::customer::{CreatedAt, CustomerRecord};
use serde::Serialize;
use std::collections::HashMap;

/// How many `created_at` samples the report previews.
const DATE_PREVIEW_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub total: usize,

    pub null_emails: usize,
    pub null_email_rate: f64,

    pub null_phones: usize,
    pub null_phone_rate: f64,

    /// Present emails missing the '@' separator (malformed proxy).
    pub malformed_emails: usize,
    pub malformed_email_rate: f64,

    /// First names containing a double-space sequence (extra-spaces proxy).
    pub spaced_names: usize,
    pub spaced_name_rate: f64,

    /// Records sharing a non-absent email value with at least one other
    /// record (duplicate-by-email proxy).
    pub duplicate_emails: usize,
    pub duplicate_email_rate: f64,

    /// Evenly-spaced preview of distinct textual `created_at` values.
    pub date_format_samples: Vec<String>,
}

pub struct QualityAnalyzer;

impl QualityAnalyzer {
    pub fn analyze(records: &[CustomerRecord]) -> QualityReport {
        let total = records.len();

        let null_emails = records.iter().filter(|r| r.email.is_none()).count();
        let null_phones = records.iter().filter(|r| r.phone.is_none()).count();

        let malformed_emails = records
            .iter()
            .filter(|r| matches!(&r.email, Some(e) if !e.contains('@')))
            .count();

        let spaced_names = records
            .iter()
            .filter(|r| r.first_name.contains("  "))
            .count();

        let mut email_counts: HashMap<&str, usize> = HashMap::new();
        for record in records {
            if let Some(email) = &record.email {
                *email_counts.entry(email.as_str()).or_default() += 1;
            }
        }
        let duplicate_emails = records
            .iter()
            .filter(|r| {
                matches!(&r.email, Some(e) if email_counts.get(e.as_str()).copied().unwrap_or(0) >= 2)
            })
            .count();

        QualityReport {
            total,
            null_emails,
            null_email_rate: rate(null_emails, total),
            null_phones,
            null_phone_rate: rate(null_phones, total),
            malformed_emails,
            malformed_email_rate: rate(malformed_emails, total),
            spaced_names,
            spaced_name_rate: rate(spaced_names, total),
            duplicate_emails,
            duplicate_email_rate: rate(duplicate_emails, total),
            date_format_samples: sample_dates(records),
        }
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Evenly-spaced picks across the collection, deduplicated. Deterministic on
/// purpose: a random sample would either consume the generation RNG or hide
/// state, and the analyzer must be idempotent.
fn sample_dates(records: &[CustomerRecord]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }
    let step = (records.len() / DATE_PREVIEW_SIZE).max(1);
    let mut samples = Vec::new();
    for record in records.iter().step_by(step) {
        let rendered = match &record.created_at {
            CreatedAt::Text(s) => s.clone(),
            CreatedAt::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        if !samples.contains(&rendered) {
            samples.push(rendered);
        }
        if samples.len() == DATE_PREVIEW_SIZE {
            break;
        }
    }
    samples
}
