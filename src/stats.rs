// Dataset summary display: roster sizes and freelancer pool shapes.

use std::path::Path;

use anyhow::Result;

use crate::loader::{companies, missions};
use crate::matching::map_affiliations;

/// Load both tables and display a summary of the dataset to the terminal.
pub fn show(companies_path: &Path, missions_dir: &Path) -> Result<()> {
    let roster = companies::load_companies(companies_path)?;
    let mission_rows = missions::load_missions_dir(missions_dir)?;
    let affiliations = map_affiliations(&mission_rows);

    println!("Roster: {} companies ({})", roster.len(), companies_path.display());
    let named = roster.iter().filter(|c| c.name.is_some()).count();
    if named < roster.len() {
        println!("  {} without a display name", roster.len() - named);
    }

    println!("Missions: {} rows ({})", mission_rows.len(), missions_dir.display());

    if affiliations.is_empty() {
        println!("Freelancer pools: none (no surviving mission rows)");
        return Ok(());
    }

    let distinct_freelancers = affiliations
        .values()
        .flatten()
        .collect::<std::collections::HashSet<_>>()
        .len();
    let total_affiliations: usize = affiliations.values().map(|pool| pool.len()).sum();
    let mean_pool = total_affiliations as f64 / affiliations.len() as f64;
    // Largest pool; ties resolve to the lexicographically smallest id so the
    // output is deterministic.
    let (largest_company, largest_pool) = affiliations
        .iter()
        .map(|(company, pool)| (company.as_str(), pool.len()))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .unwrap_or(("", 0));

    println!(
        "Freelancer pools: {} companies with missions, {} distinct freelancers",
        affiliations.len(),
        distinct_freelancers
    );
    println!(
        "  Mean pool size: {:.1}  Largest: {} ({})",
        mean_pool, largest_pool, largest_company
    );

    Ok(())
}
