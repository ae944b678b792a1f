use std::env;
use std::path::Path;

use anyhow::Result;

use crate::report::writer::ReportFormat;

/// Minimum shared-freelancer count applied when neither the CLI flag nor the
/// environment specifies one.
pub const DEFAULT_MIN_SHARED: usize = 10;

/// Central configuration loaded from environment variables.
///
/// Every value has a CLI flag that overrides it; the environment (and the
/// .env file loaded via dotenvy at startup) only provides defaults.
pub struct Config {
    /// Path to the company roster CSV (POOLSCAN_COMPANIES_PATH).
    pub companies_path: String,
    /// Directory holding the per-period mission CSV files (POOLSCAN_MISSIONS_DIR).
    pub missions_dir: String,
    /// Minimum shared freelancers for a pair to be reported (POOLSCAN_MIN_SHARED).
    pub min_shared: usize,
    /// Report destination (POOLSCAN_OUTPUT_PATH). When unset, a default
    /// matching the chosen format is used.
    pub output_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Paths default to the conventional layout (roster next to the binary,
    /// missions in ./missions). An unparseable POOLSCAN_MIN_SHARED falls back
    /// to the default rather than erroring.
    pub fn load() -> Result<Self> {
        let min_shared = env::var("POOLSCAN_MIN_SHARED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_SHARED);

        Ok(Self {
            companies_path: env::var("POOLSCAN_COMPANIES_PATH")
                .unwrap_or_else(|_| "companies_listing.csv".to_string()),
            missions_dir: env::var("POOLSCAN_MISSIONS_DIR")
                .unwrap_or_else(|_| "./missions".to_string()),
            min_shared,
            output_path: env::var("POOLSCAN_OUTPUT_PATH").ok(),
        })
    }

    /// Check that both input locations exist.
    /// Call this before running the pipeline so the user gets one actionable
    /// message instead of a mid-run failure.
    pub fn require_inputs(&self) -> Result<()> {
        if !Path::new(&self.companies_path).is_file() {
            anyhow::bail!(
                "Company roster not found at {}\n\
                 Pass --companies <path> or set POOLSCAN_COMPANIES_PATH.",
                self.companies_path
            );
        }
        if !Path::new(&self.missions_dir).is_dir() {
            anyhow::bail!(
                "Missions directory not found at {}\n\
                 Pass --missions-dir <path> or set POOLSCAN_MISSIONS_DIR.",
                self.missions_dir
            );
        }
        Ok(())
    }

    /// Resolve the report destination for the chosen format.
    pub fn output_path_for(&self, format: ReportFormat) -> String {
        self.output_path.clone().unwrap_or_else(|| match format {
            ReportFormat::Csv => "output/pairs_report.csv".to_string(),
            ReportFormat::Json => "output/pairs_report.json".to_string(),
        })
    }
}
