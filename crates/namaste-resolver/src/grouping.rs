//! Disease grouping of symptom-search results.
//!
//! Candidates are clustered by TM2 code, ranked by the confidence of each
//! cluster's first member and bounded by the configured group limit. When the
//! limit is exceeded only the group count is returned, never a truncated list.

use std::collections::HashMap;
use std::time::Instant;

use namaste_types::{CodeRecord, DiseaseGroup, GroupedMatches, GroupedResult};

use crate::error::ResolverResult;
use crate::resolver::TerminologyResolver;
use crate::store::RecordStore;
use crate::symptoms::join_terms;

impl<S: RecordStore> TerminologyResolver<S> {
    /// Searches the joined symptoms and groups the matches by TM2 code.
    pub fn group_symptom_matches<T: AsRef<str>>(
        &self,
        symptoms: &[T],
    ) -> ResolverResult<GroupedResult> {
        if symptoms.is_empty() {
            return Ok(GroupedResult::NoSymptoms);
        }

        let started = Instant::now();
        let matched_symptoms = join_terms(symptoms);
        let candidates = self.match_by_symptoms(&matched_symptoms)?;
        let outcome = group_candidates(
            matched_symptoms.clone(),
            candidates,
            self.config.max_disease_groups,
        );

        self.observer
            .symptoms_grouped(&matched_symptoms, &outcome, started.elapsed());
        Ok(outcome)
    }
}

/// Groups candidates by TM2 code and applies the group limit.
///
/// Unmapped candidates are dropped before counting. Groups are ordered by
/// similarity score, highest first; equal scores keep first-seen order.
pub fn group_candidates(
    matched_symptoms: String,
    candidates: Vec<CodeRecord>,
    max_groups: usize,
) -> GroupedResult {
    if candidates.is_empty() {
        return GroupedResult::NoMatches;
    }

    let mut groups = group_by_target(candidates);
    groups.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));

    if groups.len() > max_groups {
        return GroupedResult::TooManyGroups(groups.len());
    }

    GroupedResult::Grouped(GroupedMatches {
        matched_symptoms,
        groups,
    })
}

/// Clusters mapped records by TM2 code in first-seen order.
fn group_by_target(candidates: Vec<CodeRecord>) -> Vec<DiseaseGroup> {
    let mut groups: Vec<DiseaseGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in candidates {
        let Some(target_code) = record.mapped_target_code().map(str::to_string) else {
            continue;
        };

        match index.get(&target_code) {
            Some(&position) => groups[position].members.push(record),
            None => {
                index.insert(target_code.clone(), groups.len());
                groups.push(DiseaseGroup::seeded_by(target_code, record));
            }
        }
    }

    groups
}
