// Affiliation mapping: which freelancers worked for which company.

use std::collections::{HashMap, HashSet};

use crate::model::Mission;

/// Mapping from company id to the set of freelancers who performed at least
/// one mission for it. Set semantics: repeat engagements collapse to a
/// single affiliation.
pub type AffiliationMap = HashMap<String, HashSet<String>>;

/// Build the affiliation mapping from the mission table in a single pass.
///
/// The mapping covers exactly the companies that appear in at least one
/// mission; a company with zero missions never gets a key, so there are no
/// empty-set entries. Identifiers are taken as-is: the loader has already
/// filtered blank ids, and this function does not re-validate.
pub fn map_affiliations(missions: &[Mission]) -> AffiliationMap {
    let mut affiliations = AffiliationMap::new();

    for mission in missions {
        affiliations
            .entry(mission.company_id.clone())
            .or_default()
            .insert(mission.freelance_id.clone());
    }

    affiliations
}
