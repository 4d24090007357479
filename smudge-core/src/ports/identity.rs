// smudge-core/src/ports/identity.rs
//
// Capability boundary for the fake-identity generator. The core only asks
// for "a plausible clean person"; whether that comes from word pools, a
// faker library or a canned fixture is an adapter decision.

use chrono::NaiveDateTime;
use rand::rngs::StdRng;

/// A fully-formed, uncorrupted identity as produced by the source.
/// Everything here is well-formed; defects are injected later.
#[derive(Debug, Clone)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub created_at: NaiveDateTime,
}

pub trait IdentitySource: Send + Sync {
    /// Fabricates one plausible person. All randomness must come from the
    /// caller's RNG so generation stays reproducible.
    fn identity(&self, rng: &mut StdRng) -> Identity;

    /// Fabricates a phone number alone (used by the duplicate deriver's
    /// "same person, new phone" variation).
    fn phone_number(&self, rng: &mut StdRng) -> String;
}
