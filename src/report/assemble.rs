// Joins company display names onto the matched pairs.

use std::collections::HashMap;

use crate::model::{Company, PairMatch, ReportRow};

/// Attach display names to each pair by id lookup against the roster.
///
/// This is a left-style join: an id absent from the roster, or present
/// without a name, yields a `None` name rather than dropping the row.
/// Inputs are not mutated.
pub fn attach_names(pairs: &[PairMatch], roster: &[Company]) -> Vec<ReportRow> {
    let names: HashMap<&str, &str> = roster
        .iter()
        .filter_map(|company| {
            company
                .name
                .as_deref()
                .map(|name| (company.company_id.as_str(), name))
        })
        .collect();

    pairs
        .iter()
        .map(|pair| ReportRow {
            company_a_name: names.get(pair.company_a_id.as_str()).map(|n| n.to_string()),
            company_b_name: names.get(pair.company_b_id.as_str()).map(|n| n.to_string()),
            company_a_id: pair.company_a_id.clone(),
            company_b_id: pair.company_b_id.clone(),
            pair_counts: pair.shared_count,
        })
        .collect()
}
