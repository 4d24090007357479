// smudge-core/src/domain/quality/duplicates.rs
//
// Near-duplicate derivation: a new record that looks like an accidental
// re-entry of an existing customer. One superficial variation, fresh
// identifier, and the caller runs the result through the defect injector
// like any freshly created record.

use crate::domain::customer::{CustomerRecord, fresh_customer_id};
use crate::ports::identity::IdentitySource;
use rand::Rng;
use rand::rngs::StdRng;

/// Derives a near-duplicate from `original` (by value; the original is never
/// mutated). Exactly one variation is applied, chosen uniformly.
pub fn derive<S: IdentitySource + ?Sized>(
    original: &CustomerRecord,
    identities: &S,
    rng: &mut StdRng,
) -> CustomerRecord {
    let mut twin = original.clone();

    match rng.gen_range(0..4) {
        // Typo on re-entry.
        0 => twin.first_name.push('x'),
        // Secondary mailbox; an absent email stays absent.
        1 => {
            if let Some(email) = &twin.email {
                twin.email = Some(format!("new_{email}"));
            }
        }
        // CAPS-LOCK operator.
        2 => twin.first_name = twin.first_name.to_uppercase(),
        // Same person, new phone number (the original one is ignored).
        _ => twin.phone = Some(identities.phone_number(rng)),
    }

    twin.customer_id = fresh_customer_id(rng);
    twin
}
