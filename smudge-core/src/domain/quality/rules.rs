// smudge-core/src/domain/quality/rules.rs
//
// Declarative source of truth for defect probabilities and format
// enumerations. No behavior beyond eager validation; read-only after start.

use crate::domain::error::DomainError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct QualityRules {
    /// Fraction of the final dataset that is duplicate-derived.
    #[serde(default = "default_duplicate_rate")]
    pub duplicate_rate: f64,

    #[serde(default = "default_null_email_rate")]
    pub null_email_rate: f64,

    #[serde(default = "default_null_phone_rate")]
    pub null_phone_rate: f64,

    #[serde(default = "default_malformed_email_rate")]
    pub malformed_email_rate: f64,

    #[serde(default = "default_mixed_case_rate")]
    pub mixed_case_rate: f64,

    #[serde(default = "default_extra_spaces_rate")]
    pub extra_spaces_rate: f64,

    #[serde(default = "default_special_chars_rate")]
    pub special_chars_rate: f64,

    /// Admissible textual layouts for `created_at` (strftime syntax).
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<String>,

    /// Domains consumed by the identity source when fabricating emails.
    #[serde(default = "default_email_domains")]
    pub email_domains: Vec<String>,

    /// Country prefixes consumed by the identity source for phone numbers.
    #[serde(default = "default_phone_prefixes")]
    pub phone_prefixes: Vec<String>,
}

// Default probabilities, tuned so the defects stay visible at 5k records.
fn default_duplicate_rate() -> f64 {
    0.15
}
fn default_null_email_rate() -> f64 {
    0.05
}
fn default_null_phone_rate() -> f64 {
    0.10
}
fn default_malformed_email_rate() -> f64 {
    0.05
}
fn default_mixed_case_rate() -> f64 {
    0.30
}
fn default_extra_spaces_rate() -> f64 {
    0.20
}
fn default_special_chars_rate() -> f64 {
    0.08
}

fn default_date_formats() -> Vec<String> {
    vec![
        "%Y-%m-%d".to_string(),          // ISO: 2024-01-15
        "%d/%m/%Y".to_string(),          // European: 15/01/2024
        "%m-%d-%Y".to_string(),          // American: 01-15-2024
        "%Y/%m/%d %H:%M:%S".to_string(), // Timestamp: 2024/01/15 14:30:00
    ]
}

fn default_email_domains() -> Vec<String> {
    vec![
        "gmail.com".to_string(),
        "yahoo.com".to_string(),
        "outlook.com".to_string(),
        "hotmail.com".to_string(),
        "protonmail.com".to_string(),
        "company.com".to_string(),
    ]
}

fn default_phone_prefixes() -> Vec<String> {
    vec![
        "+33".to_string(), // France
        "+1".to_string(),  // USA
        "+44".to_string(), // UK
    ]
}

impl Default for QualityRules {
    fn default() -> Self {
        Self {
            duplicate_rate: default_duplicate_rate(),
            null_email_rate: default_null_email_rate(),
            null_phone_rate: default_null_phone_rate(),
            malformed_email_rate: default_malformed_email_rate(),
            mixed_case_rate: default_mixed_case_rate(),
            extra_spaces_rate: default_extra_spaces_rate(),
            special_chars_rate: default_special_chars_rate(),
            date_formats: default_date_formats(),
            email_domains: default_email_domains(),
            phone_prefixes: default_phone_prefixes(),
        }
    }
}

impl QualityRules {
    /// Rejects a bad configuration eagerly, before any record is generated.
    /// The generation core itself is total; this is the only place a
    /// configuration error can surface.
    pub fn validate(&self) -> Result<(), DomainError> {
        let rates = [
            ("duplicate_rate", self.duplicate_rate),
            ("null_email_rate", self.null_email_rate),
            ("null_phone_rate", self.null_phone_rate),
            ("malformed_email_rate", self.malformed_email_rate),
            ("mixed_case_rate", self.mixed_case_rate),
            ("extra_spaces_rate", self.extra_spaces_rate),
            ("special_chars_rate", self.special_chars_rate),
        ];
        for (name, value) in rates {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(DomainError::InvalidRate { name, value });
            }
        }

        if self.date_formats.is_empty() {
            return Err(DomainError::EmptyEnumeration("date_formats"));
        }
        if self.email_domains.is_empty() {
            return Err(DomainError::EmptyEnumeration("email_domains"));
        }
        if self.phone_prefixes.is_empty() {
            return Err(DomainError::EmptyEnumeration("phone_prefixes"));
        }

        // chrono only reports a bad specifier when the formatter runs, so
        // probe each layout against a fixed instant here instead of letting
        // the injector hit it mid-generation.
        let probe = NaiveDateTime::default();
        for layout in &self.date_formats {
            let mut buf = String::new();
            if write!(&mut buf, "{}", probe.format(layout)).is_err() {
                return Err(DomainError::InvalidDateLayout(layout.clone()));
            }
        }

        Ok(())
    }
}
