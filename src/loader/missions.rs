// Mission record loading.
//
// Missions arrive as one CSV per period in a single directory. Each raw
// contract row is stripped down to the (company_id, freelance_id) pair;
// rows missing either identifier are useless for matching and are dropped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::Mission;

use super::non_blank;

#[derive(Debug, Deserialize)]
struct RawMissionRow {
    #[serde(default)]
    company_id: Option<String>,
    #[serde(default)]
    freelance_id: Option<String>,
}

/// Load mission records from a single CSV file.
pub fn load_missions(path: &Path) -> Result<Vec<Mission>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open missions file {}", path.display()))?;

    let mut missions = Vec::new();
    let mut dropped = 0usize;

    for record in reader.deserialize() {
        let raw: RawMissionRow =
            record.with_context(|| format!("malformed row in {}", path.display()))?;
        match (non_blank(raw.company_id), non_blank(raw.freelance_id)) {
            (Some(company_id), Some(freelance_id)) => missions.push(Mission {
                company_id,
                freelance_id,
            }),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            dropped,
            path = %path.display(),
            "dropped mission rows missing an identifier"
        );
    }

    Ok(missions)
}

/// Load and concatenate every mission CSV in a directory.
///
/// Files are visited in sorted filename order so the resulting table is
/// deterministic regardless of filesystem enumeration order. Non-CSV files
/// are skipped. An empty directory yields an empty table, not an error.
pub fn load_missions_dir(dir: &Path) -> Result<Vec<Mission>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read missions directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        warn!(dir = %dir.display(), "no mission CSV files found");
        return Ok(Vec::new());
    }

    let mut missions = Vec::new();
    for file in &files {
        let batch = load_missions(file)?;
        info!(
            rows = batch.len(),
            file = %file.display(),
            "missions file loaded"
        );
        missions.extend(batch);
    }

    info!(
        files = files.len(),
        rows = missions.len(),
        "mission table assembled"
    );

    Ok(missions)
}
