// smudge-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Rate '{name}' must be within [0, 1], got {value}")]
    #[diagnostic(
        code(smudge::domain::invalid_rate),
        help("Fix the probability under 'rules:' in your smudge.yaml.")
    )]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Target record count must be at least 1, got {0}")]
    #[diagnostic(code(smudge::domain::invalid_target))]
    InvalidTargetCount(usize),

    #[error("Enumeration '{0}' must not be empty")]
    #[diagnostic(
        code(smudge::domain::empty_enumeration),
        help("Provide at least one entry under 'rules:' in your smudge.yaml.")
    )]
    EmptyEnumeration(&'static str),

    #[error("Date layout '{0}' is not a valid strftime format")]
    #[diagnostic(code(smudge::domain::invalid_date_layout))]
    InvalidDateLayout(String),
}
