// smudge-core/src/infrastructure/identity.rs
//
// Pool-backed implementation of the IdentitySource port. The pools mix
// French and English entries, like a CRM spanning several markets.
// Timestamps are drawn from the two years preceding a fixed anchor instant
// instead of wall-clock "now", so a seeded run is bit-for-bit reproducible.

use crate::ports::identity::{Identity, IdentitySource};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use rand::rngs::StdRng;

const FIRST_NAMES: &[&str] = &[
    "Marie", "Jean", "Camille", "Louis", "Chloé", "Hugo", "Léa", "Lucas", "Manon", "Nathan",
    "Emma", "Oliver", "Ava", "George", "Isla", "Noah", "Sophia", "Jack", "Amelia", "Liam",
    "Olivia", "James", "Mia", "Henry", "Grace", "Ethan", "Ruby", "Mason", "Ella", "Logan",
];

const LAST_NAMES: &[&str] = &[
    "Dubois", "Martin", "Bernard", "Petit", "Moreau", "Laurent", "Lefebvre", "Roux", "Girard",
    "Fournier", "Smith", "Johnson", "Williams", "Brown", "Jones", "Taylor", "Davies", "Evans",
    "Wilson", "Thomas", "Walker", "Wright", "Robinson", "Thompson", "White", "Hughes", "Green",
    "Hall", "Clarke", "Baker",
];

const STREET_NAMES: &[&str] = &[
    "Rue de la République", "Avenue Victor Hugo", "Boulevard Saint-Michel", "Rue des Lilas",
    "Main Street", "High Street", "Church Lane", "Park Avenue", "Station Road", "Mill Road",
    "Oak Street", "Elm Drive", "King Street", "Queen's Road", "Market Square",
];

const CITIES: &[&str] = &[
    "Paris", "Lyon", "Marseille", "Toulouse", "Nantes", "Bordeaux", "New York", "Chicago",
    "Austin", "Seattle", "Denver", "Boston", "London", "Manchester", "Bristol", "Leeds",
    "Glasgow", "Cardiff",
];

const COUNTRY_CODES: &[&str] = &["FR", "US", "GB"];

/// Two years, in minutes (the sampling window behind the anchor).
const WINDOW_MINUTES: i64 = 2 * 365 * 24 * 60;

pub struct PoolIdentitySource {
    email_domains: Vec<String>,
    phone_prefixes: Vec<String>,
    anchor: NaiveDateTime,
}

impl PoolIdentitySource {
    /// `email_domains` and `phone_prefixes` come from the quality rule set
    /// and must be non-empty (the rule set validates this eagerly).
    pub fn new(email_domains: &[String], phone_prefixes: &[String], anchor: NaiveDateTime) -> Self {
        Self {
            email_domains: email_domains.to_vec(),
            phone_prefixes: phone_prefixes.to_vec(),
            anchor,
        }
    }
}

fn pick<'a>(pool: &'a [&'a str], rng: &mut StdRng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

impl IdentitySource for PoolIdentitySource {
    fn identity(&self, rng: &mut StdRng) -> Identity {
        let first_name = pick(FIRST_NAMES, rng).to_string();
        let last_name = pick(LAST_NAMES, rng).to_string();

        // Numeric disambiguator keeps natural collisions rare; the duplicate
        // deriver is the intended source of shared emails, not the pools.
        let domain = &self.email_domains[rng.gen_range(0..self.email_domains.len())];
        let email = format!(
            "{}.{}{}@{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            rng.gen_range(1..1000),
            domain
        );

        let address = format!("{} {}", rng.gen_range(1..200), pick(STREET_NAMES, rng));

        let created_at = self.anchor - Duration::minutes(rng.gen_range(0..WINDOW_MINUTES));

        Identity {
            first_name,
            last_name,
            email,
            phone: self.phone_number(rng),
            address,
            city: pick(CITIES, rng).to_string(),
            country: pick(COUNTRY_CODES, rng).to_string(),
            created_at,
        }
    }

    fn phone_number(&self, rng: &mut StdRng) -> String {
        let prefix = &self.phone_prefixes[rng.gen_range(0..self.phone_prefixes.len())];
        format!("{} {:09}", prefix, rng.gen_range(0..1_000_000_000u32))
    }
}
