//! Loader-specific types for code record files.

use thiserror::Error;

/// Errors that can occur while loading code record files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading a record file.
    #[error("IO error reading record file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// File extension is neither `.csv` nor `.json`.
    #[error("Unsupported record file format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// Confidence score is not a number in `[0, 1]`.
    #[error("Invalid confidence score: {value}")]
    InvalidScore {
        /// The invalid score value.
        value: String,
    },

    /// A required field is empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the empty field.
        field: &'static str,
    },
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Filters applied to records as they are loaded.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Skip records without a TM2 mapping.
    pub require_mapping: bool,
    /// Skip records scoring below this (records without a score are skipped too).
    pub min_confidence: Option<f64>,
}

impl LoaderConfig {
    /// Creates a config that keeps only mapped records.
    pub fn mapped_only() -> Self {
        Self {
            require_mapping: true,
            min_confidence: None,
        }
    }
}

/// Statistics from loading a record file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    /// Total rows read from the file.
    pub total_records: usize,
    /// Records that passed filters and were stored.
    pub loaded_records: usize,
    /// Records skipped by filters.
    pub skipped_records: usize,
    /// Malformed rows skipped (non-fatal).
    pub error_count: usize,
}

impl LoadStats {
    /// Returns the percentage of rows that were stored.
    pub fn load_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.loaded_records as f64 / self.total_records as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_config_default_keeps_everything() {
        let config = LoaderConfig::default();
        assert!(!config.require_mapping);
        assert!(config.min_confidence.is_none());
    }

    #[test]
    fn test_loader_config_mapped_only() {
        assert!(LoaderConfig::mapped_only().require_mapping);
    }

    #[test]
    fn test_load_stats_rate() {
        let stats = LoadStats {
            total_records: 200,
            loaded_records: 150,
            ..Default::default()
        };
        assert!((stats.load_rate() - 75.0).abs() < 0.01);
        assert_eq!(LoadStats::default().load_rate(), 0.0);
    }
}
