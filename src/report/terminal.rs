// Colored terminal output for the pair report.
//
// All terminal-specific formatting lives here: colors, column layout, and
// the summary lines. main.rs delegates display to this module.

use colored::Colorize;

use crate::model::ReportRow;

/// Display the qualifying pairs as a ranked table, strongest overlap first.
pub fn display_pair_list(rows: &[ReportRow]) {
    if rows.is_empty() {
        println!("No company pairs met the threshold. Try a lower --min-shared.");
        return;
    }

    // Rank by shared count descending; ties break on the id pair so the
    // table is stable.
    let mut ranked: Vec<&ReportRow> = rows.iter().collect();
    ranked.sort_by(|a, b| {
        b.pair_counts
            .cmp(&a.pair_counts)
            .then_with(|| a.company_a_id.cmp(&b.company_a_id))
            .then_with(|| a.company_b_id.cmp(&b.company_b_id))
    });

    println!(
        "\n{}",
        format!("=== Shared Freelancer Pools ({} pairs) ===", rows.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<28} {:<28} {:>7}",
        "Rank".dimmed(),
        "Company A".dimmed(),
        "Company B".dimmed(),
        "Shared".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, row) in ranked.iter().enumerate() {
        println!(
            "  {:>4}. {:<28} {:<28} {:>7}",
            i + 1,
            display_label(row.company_a_name.as_deref(), &row.company_a_id),
            display_label(row.company_b_name.as_deref(), &row.company_b_id),
            row.pair_counts,
        );
    }

    println!();

    let max_shared = ranked.first().map(|r| r.pair_counts).unwrap_or(0);
    println!("  Strongest overlap: {} shared freelancers", max_shared);
}

/// Prefer the display name; fall back to the raw id when the roster had no
/// name for it.
fn display_label(name: Option<&str>, id: &str) -> String {
    match name {
        Some(name) => name.to_string(),
        None => id.to_string(),
    }
}
