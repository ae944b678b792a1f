// Data models: the record types that flow through the pipeline.
//
// These are kept separate from the loader so the matching engine can work
// with records from any source, not just the CSV files.

use serde::{Deserialize, Serialize};

/// One row of the company roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub company_id: String,
    /// Display name. The roster may omit it, so joins must tolerate `None`.
    pub name: Option<String>,
}

/// A single company/freelancer engagement, stripped to the two identifiers.
///
/// Repeat engagements produce multiple missions with the same pair of ids;
/// the affiliation mapper collapses them to a single affiliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub company_id: String,
    pub freelance_id: String,
}

/// A qualifying pair of companies and the number of freelancers they share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairMatch {
    pub company_a_id: String,
    pub company_b_id: String,
    pub shared_count: usize,
}

/// Final report row: a pair match enriched with both display names.
///
/// Field order matters: the CSV writer emits columns in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub company_a_name: Option<String>,
    pub company_b_name: Option<String>,
    pub company_a_id: String,
    pub company_b_id: String,
    pub pair_counts: usize,
}
