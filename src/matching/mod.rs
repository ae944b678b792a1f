// The matching engine: affiliation mapping and pairwise set intersection.
//
// This is the algorithmic heart of the tool: a linear pass to build the
// company -> freelancer-set mapping, then a quadratic pass over company
// pairs to find overlapping pools.

pub mod affiliations;
pub mod intersect;

pub use affiliations::{map_affiliations, AffiliationMap};
pub use intersect::{intersect_pairs, intersect_pairs_observed};
