//! Code record row mapping and load-time filters.

use csv::StringRecord;
use namaste_types::{Category, CodeRecord};

use crate::parser::parse;
use crate::types::{LoadError, LoadResult, LoaderConfig};

/// Expected columns in a code record CSV file.
pub const CODE_RECORD_COLUMNS: &[&str] = &[
    "id",
    "code",
    "code_title",
    "code_description",
    "type",
    "tm2_code",
    "tm2_title",
    "tm2_definition",
    "tm2_uri",
    "confidence_score",
];

/// Builds a [`CodeRecord`] from one CSV row.
pub(crate) fn from_record(record: &StringRecord) -> LoadResult<CodeRecord> {
    let field = |i: usize| record.get(i).unwrap_or("");

    Ok(CodeRecord {
        id: parse::required_text(field(0), "id")?,
        local_code: parse::required_text(field(1), "code")?,
        local_title: field(2).trim().to_string(),
        local_description: parse::optional_text(field(3)),
        category: Category::from_tag(&parse::required_text(field(4), "type")?),
        target_code: parse::optional_text(field(5)),
        target_title: parse::optional_text(field(6)),
        target_definition: parse::optional_text(field(7)),
        target_uri: parse::optional_text(field(8)),
        confidence_score: parse::confidence_score(field(9))?,
    })
}

/// Applies the CSV row rules to a record built elsewhere (e.g. from JSON).
///
/// Required text must be non-blank, optional text is trimmed with blanks
/// dropped, and the confidence score must lie in `[0, 1]`.
pub(crate) fn validate(record: CodeRecord) -> LoadResult<CodeRecord> {
    let category = match record.category {
        Category::Other(tag) => Category::from_tag(&parse::required_text(&tag, "type")?),
        known => known,
    };

    let confidence_score = match record.confidence_score {
        Some(score) if !(0.0..=1.0).contains(&score) => {
            return Err(LoadError::InvalidScore {
                value: score.to_string(),
            })
        }
        score => score,
    };

    let trimmed = |value: Option<String>| value.as_deref().and_then(parse::optional_text);

    Ok(CodeRecord {
        id: parse::required_text(&record.id, "id")?,
        local_code: parse::required_text(&record.local_code, "code")?,
        local_title: record.local_title.trim().to_string(),
        local_description: trimmed(record.local_description),
        category,
        target_code: trimmed(record.target_code),
        target_title: trimmed(record.target_title),
        target_definition: trimmed(record.target_definition),
        target_uri: trimmed(record.target_uri),
        confidence_score,
    })
}

/// Load-time filtering for code records.
pub trait RecordFilter {
    /// Returns true if the record should be stored.
    fn passes_filter(&self, config: &LoaderConfig) -> bool;
}

impl RecordFilter for CodeRecord {
    fn passes_filter(&self, config: &LoaderConfig) -> bool {
        if config.require_mapping && !self.has_mapping() {
            return false;
        }

        if let Some(min) = config.min_confidence {
            if self.confidence_score.map_or(true, |score| score < min) {
                return false;
            }
        }

        true
    }
}
