//! NAMASTE code record type.
//!
//! This module provides the `CodeRecord` struct, one canonical entry pairing a
//! traditional-medicine code with its (optional) ICD-11 TM2 mapping.

use crate::Category;

/// A traditional-medicine code and its mapping to an ICD-11 TM2 code.
///
/// `local_code` is not unique: several records may share it while differing
/// in `category` or `target_code`.
///
/// # Examples
///
/// ```
/// use namaste_types::{Category, CodeRecord};
///
/// let record = CodeRecord::new("1", "AAA-1", "Jvara", Category::Ayurveda)
///     .with_description("Fever with headache")
///     .with_target("SM2Z", "Fever disorder (TM2)")
///     .with_confidence(0.85);
///
/// assert_eq!(record.mapped_target_code(), Some("SM2Z"));
/// assert!(record.exceeds_confidence(0.6));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeRecord {
    /// Opaque record identifier.
    pub id: String,
    /// The traditional-medicine (NAMASTE) code.
    #[cfg_attr(feature = "serde", serde(rename = "code"))]
    pub local_code: String,
    /// Human-readable name of the local code.
    #[cfg_attr(feature = "serde", serde(rename = "codeTitle", default))]
    pub local_title: String,
    /// Clinical description of the local code.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "codeDescription",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub local_description: Option<String>,
    /// Traditional-medicine system the code belongs to.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: Category,
    /// Mapped ICD-11 TM2 code, absent for unmapped records.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tm2Code", default, skip_serializing_if = "Option::is_none")
    )]
    pub target_code: Option<String>,
    /// Title of the mapped TM2 code.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tm2Title", default, skip_serializing_if = "Option::is_none")
    )]
    pub target_title: Option<String>,
    /// Definition of the mapped TM2 code.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "tm2Definition",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub target_definition: Option<String>,
    /// Link to the TM2 entity in the ICD-11 browser.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "tm2Uri", default, skip_serializing_if = "Option::is_none")
    )]
    pub target_uri: Option<String>,
    /// Mapping confidence in `[0, 1]`.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "confidenceScore",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub confidence_score: Option<f64>,
}

impl CodeRecord {
    /// Creates an unmapped record with no description or confidence.
    pub fn new(
        id: impl Into<String>,
        local_code: impl Into<String>,
        local_title: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            local_code: local_code.into(),
            local_title: local_title.into(),
            local_description: None,
            category,
            target_code: None,
            target_title: None,
            target_definition: None,
            target_uri: None,
            confidence_score: None,
        }
    }

    /// Sets the local description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.local_description = Some(description.into());
        self
    }

    /// Sets the mapped TM2 code and title.
    pub fn with_target(mut self, code: impl Into<String>, title: impl Into<String>) -> Self {
        self.target_code = Some(code.into());
        self.target_title = Some(title.into());
        self
    }

    /// Sets the TM2 definition.
    pub fn with_target_definition(mut self, definition: impl Into<String>) -> Self {
        self.target_definition = Some(definition.into());
        self
    }

    /// Sets the TM2 URI.
    pub fn with_target_uri(mut self, uri: impl Into<String>) -> Self {
        self.target_uri = Some(uri.into());
        self
    }

    /// Sets the mapping confidence.
    pub fn with_confidence(mut self, score: f64) -> Self {
        self.confidence_score = Some(score);
        self
    }

    /// Returns the trimmed target code, or `None` if absent or blank.
    pub fn mapped_target_code(&self) -> Option<&str> {
        self.target_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }

    /// Returns true if this record maps to a TM2 code.
    pub fn has_mapping(&self) -> bool {
        self.mapped_target_code().is_some()
    }

    /// Returns true if the confidence score is present and strictly above `threshold`.
    ///
    /// Records without a score never pass.
    pub fn exceeds_confidence(&self, threshold: f64) -> bool {
        self.confidence_score.is_some_and(|score| score > threshold)
    }

    /// Confidence used for ranking, with an absent score treated as `0.0`.
    pub fn ranking_score(&self) -> f64 {
        self.confidence_score.unwrap_or(0.0)
    }

    /// Returns true if `code` equals this record's local code or its mapped
    /// (trimmed) target code.
    pub fn matches_code(&self, code: &str) -> bool {
        self.local_code == code || self.mapped_target_code() == Some(code)
    }
}
