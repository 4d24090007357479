// smudge-core/src/domain/quality/injector.rs
//
// Applies the quality rule set to a single record. Every rule is an
// independent Bernoulli trial, but the ORDER is load-bearing: later rules
// read the output of earlier ones (malformed-email only fires if null-email
// did not, extra-spaces pads whatever casing rule 3 produced, etc.).

use crate::domain::customer::{CreatedAt, CustomerRecord};
use crate::domain::quality::rules::QualityRules;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub struct DefectInjector<'a> {
    rules: &'a QualityRules,
}

impl<'a> DefectInjector<'a> {
    pub fn new(rules: &'a QualityRules) -> Self {
        Self { rules }
    }

    /// Corrupts one record in place. Total: always produces a valid, if
    /// defective, record. Each record passes through here exactly once.
    pub fn inject(&self, customer: &mut CustomerRecord, rng: &mut StdRng) {
        // RULE 1: null email. Short-circuits rule 2 for this record.
        if rng.gen_bool(self.rules.null_email_rate) {
            customer.email = None;
        }
        // RULE 2: malformed email, only when an email survived rule 1.
        else if let Some(email) = customer.email.as_mut()
            && rng.gen_bool(self.rules.malformed_email_rate)
        {
            *email = corrupt_email(email, rng);
        }

        // RULE 3: mixed casing on the first name.
        if rng.gen_bool(self.rules.mixed_case_rate) {
            customer.first_name = match rng.gen_range(0..3) {
                0 => customer.first_name.to_uppercase(),
                1 => customer.first_name.to_lowercase(),
                _ => title_case(&customer.first_name),
            };
        }

        // RULE 4: extra whitespace. Asymmetric on purpose: the last name
        // gets one fewer trailing space, simulating an inconsistent trim bug.
        if rng.gen_bool(self.rules.extra_spaces_rate) {
            customer.first_name = format!("  {}  ", customer.first_name);
            customer.last_name = format!("  {} ", customer.last_name);
            if let Some(email) = &customer.email {
                customer.email = Some(format!(" {} ", email));
            }
        }

        // RULE 5: null phone. Independent of every email/name rule.
        if rng.gen_bool(self.rules.null_phone_rate) {
            customer.phone = None;
        }

        // RULE 6: stray symbols in the names.
        if rng.gen_bool(self.rules.special_chars_rate) {
            customer.first_name.push('™');
            customer.last_name = format!("©{}", customer.last_name);
        }

        // RULE 7: inconsistent date rendering. Every record reaches this
        // step exactly once with a structured timestamp; after it the field
        // is permanently text.
        if let CreatedAt::Timestamp(ts) = customer.created_at
            && let Some(layout) = self.rules.date_formats.choose(rng)
        {
            customer.created_at = CreatedAt::Text(ts.format(layout).to_string());
        }
    }
}

/// One of five corruption variants, chosen uniformly.
fn corrupt_email(email: &str, rng: &mut StdRng) -> String {
    match rng.gen_range(0..5) {
        0 => email.replace('@', ""),
        1 => email.replace('.', ""),
        2 => email.replace('@', "@@"),
        // Strip the separator before the TLD, whatever the suffix is.
        3 => match email.rfind('.') {
            Some(idx) => {
                let mut out = email.to_string();
                out.remove(idx);
                out
            }
            None => email.to_string(),
        },
        _ => format!("invalid_{email}"),
    }
}

/// Word-initial uppercase, everything else lowered ("marie claire" ->
/// "Marie Claire").
fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
