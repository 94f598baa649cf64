//! Disease grouping types.
//!
//! Symptom-search candidates are clustered by their TM2 code into
//! `DiseaseGroup`s; the outcome of a grouped search is a `GroupedResult`.

use crate::CodeRecord;

/// Records sharing one TM2 code, produced by a grouped symptom search.
///
/// Title, definition and similarity score come from the first member
/// encountered for the code, not from the best-scoring one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DiseaseGroup {
    /// Shared TM2 code.
    #[cfg_attr(feature = "serde", serde(rename = "tm2Code"))]
    pub target_code: String,
    /// TM2 title of the first member.
    #[cfg_attr(feature = "serde", serde(rename = "tm2Title"))]
    pub target_title: Option<String>,
    /// TM2 definition of the first member.
    #[cfg_attr(feature = "serde", serde(rename = "tm2Definition"))]
    pub target_definition: Option<String>,
    /// Confidence score of the first member, used for ranking groups.
    pub similarity_score: Option<f64>,
    /// Members in the order they were matched.
    #[cfg_attr(feature = "serde", serde(rename = "mappings"))]
    pub members: Vec<CodeRecord>,
}

impl DiseaseGroup {
    /// Starts a group keyed by `target_code` with `first` as its representative.
    pub fn seeded_by(target_code: impl Into<String>, first: CodeRecord) -> Self {
        Self {
            target_code: target_code.into(),
            target_title: first.target_title.clone(),
            target_definition: first.target_definition.clone(),
            similarity_score: first.confidence_score,
            members: vec![first],
        }
    }

    /// Number of traditional-medicine records in the group.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Score used for ordering groups; an absent score counts as `0.0`.
    pub fn ranking_score(&self) -> f64 {
        self.similarity_score.unwrap_or(0.0)
    }
}

/// Groups returned by a successful grouped symptom search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GroupedMatches {
    /// The symptoms as searched, joined with `", "`.
    pub matched_symptoms: String,
    /// Groups sorted by similarity score, highest first.
    pub groups: Vec<DiseaseGroup>,
}

/// Outcome of a grouped symptom search.
///
/// Every variant is terminal. `NoSymptoms`, `NoMatches` and `TooManyGroups`
/// are outcomes, not failures.
///
/// # Examples
///
/// ```
/// use namaste_types::GroupedResult;
///
/// let outcome = GroupedResult::TooManyGroups(21);
/// assert!(outcome.groups().is_none());
/// assert_eq!(outcome.kind(), "too_many_groups");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", content = "detail", rename_all = "snake_case")
)]
pub enum GroupedResult {
    /// No symptoms were supplied.
    NoSymptoms,
    /// The symptom search found no candidates.
    NoMatches,
    /// More groups than allowed; carries the group count so callers can ask
    /// for a narrower query.
    TooManyGroups(usize),
    /// All groups, ranked.
    Grouped(GroupedMatches),
}

impl GroupedResult {
    /// Returns the groups for a `Grouped` outcome.
    pub fn groups(&self) -> Option<&[DiseaseGroup]> {
        match self {
            Self::Grouped(matches) => Some(&matches.groups),
            _ => None,
        }
    }

    /// Returns true for a `Grouped` outcome.
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }

    /// Short, stable name of the outcome kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoSymptoms => "no_symptoms",
            Self::NoMatches => "no_matches",
            Self::TooManyGroups(_) => "too_many_groups",
            Self::Grouped(_) => "grouped",
        }
    }
}
