// The full report pipeline: load roster, load missions, map affiliations,
// intersect pairs, attach names.
//
// The pair intersection is the only expensive step (quadratic in the number
// of companies with missions), so it gets a progress bar. Everything else
// is a linear pass.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::loader::{companies, missions};
use crate::matching::{intersect, map_affiliations};
use crate::model::ReportRow;
use crate::report::assemble;

/// Summary of a completed pipeline run.
pub struct RunSummary {
    /// The final report rows, names attached.
    pub rows: Vec<ReportRow>,
    pub companies_loaded: usize,
    pub mission_rows: usize,
    pub companies_with_missions: usize,
    /// Wall-clock duration of the whole run.
    pub elapsed: chrono::Duration,
}

/// Run the full pipeline and return the assembled report.
///
/// `min_shared` is the minimum number of shared freelancers for a pair of
/// companies to appear in the result.
pub fn run(companies_path: &Path, missions_dir: &Path, min_shared: usize) -> Result<RunSummary> {
    let started = Utc::now();

    // Step 1: Load the company roster
    println!("Loading company roster...");
    let roster = companies::load_companies(companies_path)?;
    println!("  {} companies", roster.len());

    // Step 2: Load and concatenate the mission files
    println!("Loading missions from {}...", missions_dir.display());
    let mission_rows = missions::load_missions_dir(missions_dir)?;
    println!("  {} mission rows", mission_rows.len());

    // Step 3: Map each company to its freelancer pool
    let affiliations = map_affiliations(&mission_rows);
    info!(
        companies = affiliations.len(),
        "affiliation mapping built"
    );

    // Step 4: Intersect every pair of pools
    println!(
        "Matching {} companies pairwise (min shared: {min_shared})...",
        affiliations.len()
    );
    let pb = ProgressBar::new(affiliations.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Matching [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );
    let pairs = intersect::intersect_pairs_observed(&affiliations, min_shared, |_| pb.inc(1));
    pb.finish_and_clear();
    info!(qualifying = pairs.len(), min_shared, "pair matching done");

    // Step 5: Attach display names
    let rows = assemble::attach_names(&pairs, &roster);

    let elapsed = Utc::now() - started;

    Ok(RunSummary {
        rows,
        companies_loaded: roster.len(),
        mission_rows: mission_rows.len(),
        companies_with_missions: affiliations.len(),
        elapsed,
    })
}
