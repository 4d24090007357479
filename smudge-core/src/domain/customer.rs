// smudge-core/src/domain/customer.rs

use chrono::NaiveDateTime;
use rand::RngCore;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Creation instant of a record. Starts life as a structured timestamp and is
/// rendered into one of several textual layouts by the defect injector;
/// after that it is permanently text. The dataset as a whole mixes both
/// flavours on purpose (this is the "inconsistent date format" defect).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Timestamp(NaiveDateTime),
    Text(String),
}

impl CreatedAt {
    /// Textual rendering regardless of variant (ISO for the structured case).
    pub fn render(&self) -> String {
        match self {
            CreatedAt::Timestamp(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            CreatedAt::Text(s) => s.clone(),
        }
    }
}

/// The only entity of the system. Address, city and country are never
/// corrupted; everything else is fair game for the injector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub created_at: CreatedAt,
}

/// Mints a globally unique identifier from the seeded RNG.
///
/// `Uuid::new_v4()` pulls from the OS entropy source, which would break the
/// reproducibility law (same seed => bit-for-bit identical dataset), so the
/// random bytes come from the caller's RNG instead.
pub fn fresh_customer_id(rng: &mut StdRng) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_fresh_ids_are_distinct_and_uuid_shaped() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = fresh_customer_id(&mut rng);
        let b = fresh_customer_id(&mut rng);
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert_eq!(a.matches('-').count(), 4);
    }

    #[test]
    fn test_fresh_ids_are_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(fresh_customer_id(&mut rng1), fresh_customer_id(&mut rng2));
    }

    #[test]
    fn test_created_at_render() {
        let text = CreatedAt::Text("15/01/2024".to_string());
        assert_eq!(text.render(), "15/01/2024");

        let ts = CreatedAt::Timestamp(NaiveDateTime::default());
        assert_eq!(ts.render(), "1970-01-01 00:00:00");
    }
}
