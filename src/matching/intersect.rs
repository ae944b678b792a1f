// Pairwise pool intersection with threshold filtering.
//
// Every unordered pair of distinct companies is evaluated exactly once.
// Instead of threading a visited-pair set through a nested loop, the keys
// are collected into a sorted list and enumerated as i < j index
// combinations. Self-pairs and duplicate orderings are impossible by
// construction, and the (a, b) labeling comes out lexicographic, so the
// output is reproducible across runs for a fixed input.

use std::collections::HashSet;

use tracing::debug;

use crate::model::PairMatch;

use super::affiliations::AffiliationMap;

/// Find all unordered pairs of distinct companies sharing at least
/// `min_shared` freelancers.
///
/// Each returned triple carries the exact intersection size of the two
/// companies' freelancer sets, with company_a_id < company_b_id. A threshold
/// of 0 reports every distinct pair, including zero-overlap ones; self-pairs
/// are excluded at any threshold.
pub fn intersect_pairs(affiliations: &AffiliationMap, min_shared: usize) -> Vec<PairMatch> {
    intersect_pairs_observed(affiliations, min_shared, |_| {})
}

/// Same as [`intersect_pairs`], invoking `on_company` after each company
/// finishes its comparisons. The pipeline uses the hook to drive a progress
/// bar over the quadratic phase; the matching logic itself stays agnostic
/// of how progress is rendered.
pub fn intersect_pairs_observed(
    affiliations: &AffiliationMap,
    min_shared: usize,
    mut on_company: impl FnMut(&str),
) -> Vec<PairMatch> {
    let mut keys: Vec<&String> = affiliations.keys().collect();
    keys.sort();

    let mut matches = Vec::new();

    for i in 0..keys.len() {
        let pool_a = &affiliations[keys[i]];
        for j in (i + 1)..keys.len() {
            let pool_b = &affiliations[keys[j]];
            let shared = shared_count(pool_a, pool_b);
            if shared >= min_shared {
                matches.push(PairMatch {
                    company_a_id: keys[i].clone(),
                    company_b_id: keys[j].clone(),
                    shared_count: shared,
                });
            }
        }
        on_company(keys[i]);
    }

    debug!(
        companies = keys.len(),
        qualifying = matches.len(),
        min_shared,
        "pair intersection complete"
    );

    matches
}

/// Number of freelancers present in both pools.
///
/// Iterates the smaller set against the larger, so each pair evaluation
/// costs O(min(|a|, |b|)).
fn shared_count(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|freelance| large.contains(*freelance)).count()
}
