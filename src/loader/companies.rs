// Company roster loading.
//
// The roster export carries more columns than we need (country, segment,
// etc.); only company_id and name survive. Rows without a company_id can't
// be linked to missions and are dropped.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::model::Company;

use super::non_blank;

/// The subset of roster columns we deserialize. Every other column in the
/// file is ignored by the csv reader.
#[derive(Debug, Deserialize)]
struct RawCompanyRow {
    #[serde(default)]
    company_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Load the company roster from a CSV file.
///
/// Rows whose company_id is missing or blank are discarded; a blank name is
/// normalized to `None` so the report join can treat it as absent.
pub fn load_companies(path: &Path) -> Result<Vec<Company>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open company roster {}", path.display()))?;

    let mut companies = Vec::new();
    let mut dropped = 0usize;

    for record in reader.deserialize() {
        let raw: RawCompanyRow =
            record.with_context(|| format!("malformed row in {}", path.display()))?;
        match non_blank(raw.company_id) {
            Some(company_id) => companies.push(Company {
                company_id,
                name: non_blank(raw.name),
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(
            dropped,
            path = %path.display(),
            "dropped roster rows without a company_id"
        );
    }
    info!(
        companies = companies.len(),
        path = %path.display(),
        "company roster loaded"
    );

    Ok(companies)
}
