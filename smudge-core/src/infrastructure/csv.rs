// smudge-core/src/infrastructure/csv.rs
//
// Tabular persistence. One row per customer, columns in a fixed order,
// absent values rendered as empty fields. The reader exists so `smudge
// analyze` can run against a file written by an earlier run (everything it
// reads back is textual, which is exactly what the analyzer expects).

use crate::domain::customer::{CreatedAt, CustomerRecord};
use crate::infrastructure::error::InfrastructureError;
use std::path::Path;

pub const COLUMNS: [&str; 9] = [
    "customer_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "address",
    "city",
    "country",
    "created_at",
];

pub fn write_dataset(path: &Path, records: &[CustomerRecord]) -> Result<(), InfrastructureError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for record in records {
        let created_at = record.created_at.render();
        writer.write_record([
            record.customer_id.as_str(),
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.email.as_deref().unwrap_or(""),
            record.phone.as_deref().unwrap_or(""),
            record.address.as_str(),
            record.city.as_str(),
            record.country.as_str(),
            created_at.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn read_dataset(path: &Path) -> Result<Vec<CustomerRecord>, InfrastructureError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.iter().ne(COLUMNS) {
        return Err(InfrastructureError::Config(format!(
            "'{}' does not look like a smudge dataset (unexpected columns: {:?})",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        )));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |i: usize| row.get(i).unwrap_or("").to_string();
        let optional = |i: usize| {
            let value = field(i);
            if value.is_empty() { None } else { Some(value) }
        };

        records.push(CustomerRecord {
            customer_id: field(0),
            first_name: field(1),
            last_name: field(2),
            email: optional(3),
            phone: optional(4),
            address: field(5),
            city: field(6),
            country: field(7),
            created_at: CreatedAt::Text(field(8)),
        });
    }

    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<CustomerRecord> {
        vec![
            CustomerRecord {
                customer_id: "id-1".to_string(),
                first_name: "  marie  ".to_string(),
                last_name: "©Dubois".to_string(),
                email: Some(" new_a@b.com ".to_string()),
                phone: None,
                address: "12 Rue des Lilas".to_string(),
                city: "Lyon".to_string(),
                country: "FR".to_string(),
                created_at: CreatedAt::Text("15/01/2024".to_string()),
            },
            CustomerRecord {
                customer_id: "id-2".to_string(),
                first_name: "Jack™".to_string(),
                last_name: "Taylor".to_string(),
                email: None,
                phone: Some("+44 001122334".to_string()),
                address: "3 High Street".to_string(),
                city: "Leeds".to_string(),
                country: "GB".to_string(),
                created_at: CreatedAt::Text("2024/01/15 14:30:00".to_string()),
            },
        ]
    }

    #[test]
    fn test_roundtrip_preserves_defects() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messy.csv");
        let original = sample();

        write_dataset(&path, &original).unwrap();
        let restored = read_dataset(&path).unwrap();

        assert_eq!(restored, original);
        // Whitespace defects survive the trip untouched.
        assert_eq!(restored[0].first_name, "  marie  ");
        assert_eq!(restored[0].email.as_deref(), Some(" new_a@b.com "));
    }

    #[test]
    fn test_absent_values_are_empty_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("messy.csv");
        write_dataset(&path, &sample()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let mut lines = raw.lines();
        assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
        assert!(raw.contains(",,")); // at least one absent field
    }

    #[test]
    fn test_foreign_csv_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();
        assert!(matches!(
            read_dataset(&path),
            Err(InfrastructureError::Config(_))
        ));
    }
}
