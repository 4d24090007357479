// smudge/src/commands/report.rs
//
// Terminal rendering of a quality report (comfy-table).

use comfy_table::Table;
use smudge_core::domain::quality::QualityReport;

pub fn print_report(report: &QualityReport) {
    println!("\n📊 DATA QUALITY REPORT ({} customers)", report.total);

    let mut table = Table::new();
    table.set_header(vec!["Defect", "Count", "Rate"]);
    table.add_row(row("NULL emails", report.null_emails, report.null_email_rate));
    table.add_row(row("NULL phones", report.null_phones, report.null_phone_rate));
    table.add_row(row(
        "Malformed emails (no '@')",
        report.malformed_emails,
        report.malformed_email_rate,
    ));
    table.add_row(row(
        "Extra spaces in names",
        report.spaced_names,
        report.spaced_name_rate,
    ));
    table.add_row(row(
        "Duplicate emails",
        report.duplicate_emails,
        report.duplicate_email_rate,
    ));
    println!("{table}");

    if !report.date_format_samples.is_empty() {
        println!("\n📅 created_at samples (mixed layouts):");
        for sample in &report.date_format_samples {
            println!("   ➜ {}", sample);
        }
    }
}

fn row(label: &str, count: usize, rate: f64) -> Vec<String> {
    vec![
        label.to_string(),
        count.to_string(),
        format!("{:.1}%", rate * 100.0),
    ]
}
