// smudge/src/commands/inspect.rs
//
// USE CASE: Inspect a warehouse table (schema + sample rows).
// Handy after 'smudge load' to eyeball the defects landing in RAW.

use duckdb::types::ValueRef;
use duckdb::{Connection, Row};
use std::path::Path;

pub fn execute(db_path: String, table: String, limit: usize) -> anyhow::Result<()> {
    if !Path::new(&db_path).exists() {
        anyhow::bail!(
            "❌ Database not found at: {}\n👉 Have you run 'smudge load'?",
            db_path
        );
    }

    let conn = Connection::open(&db_path)?;

    println!("\n🔍 Inspecting Table: '{}'", table);

    // Fetch column names
    let mut stmt_cols = conn.prepare(&format!("PRAGMA table_info({})", table))?;

    let column_names: Vec<String> = stmt_cols
        .query_map([], |row: &Row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;

    println!("   Columns: [{}]", column_names.join(", "));
    println!("   --- Rows (Limit {}) ---", limit);

    // Fetch sample rows. NULL cells are the whole point of this dataset,
    // so render them visibly instead of as a debug blob.
    let mut stmt = conn.prepare(&format!("SELECT * FROM {} LIMIT {}", table, limit))?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        let values: Vec<String> = (0..column_names.len())
            .map(|i| match row.get_ref(i) {
                Ok(ValueRef::Null) => "∅".to_string(),
                Ok(val) => format!("{:?}", val),
                Err(_) => "ERROR".to_string(),
            })
            .collect();

        println!("   ➜ {}", values.join(" | "));
    }

    // Quick defect tally on the contact columns (read_csv_auto turns the
    // sink's empty fields into SQL NULLs).
    for column in ["email", "phone"] {
        if column_names.iter().any(|c| c == column) {
            let nulls: u64 = conn.query_row(
                &format!("SELECT count(*) FROM {} WHERE {} IS NULL", table, column),
                [],
                |r| r.get(0),
            )?;
            println!("   ⚠️  NULL {}s: {}", column, nulls);
        }
    }

    Ok(())
}
