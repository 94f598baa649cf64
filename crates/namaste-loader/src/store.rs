//! In-memory NAMASTE code store.
//!
//! Keeps records in load order with indexes by local code, TM2 code and
//! category. Free-text scans run in parallel via rayon when the `parallel`
//! feature is enabled; results keep load order either way.
//!
//! ```ignore
//! let mut store = CodeStore::new();
//! store.load_file("data/namaste_codes.csv", &LoaderConfig::default())?;
//!
//! let best = store.best_for_local_code("NAM001");
//! ```

use std::collections::HashMap;
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use namaste_types::{Category, CodeRecord};
use regex::Regex;

use crate::json::read_json_file;
use crate::parser::CodeRecordParser;
use crate::record::{validate, RecordFilter};
use crate::types::{LoadError, LoadResult, LoadStats, LoaderConfig};

/// In-memory store for NAMASTE code records.
#[derive(Default)]
pub struct CodeStore {
    /// Records in load order.
    records: Vec<CodeRecord>,
    /// Record positions by local code.
    by_local_code: HashMap<String, Vec<usize>>,
    /// Record positions by TM2 code.
    by_target_code: HashMap<String, Vec<usize>>,
    /// Record positions by category.
    by_category: HashMap<Category, Vec<usize>>,
}

impl std::fmt::Debug for CodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeStore")
            .field("records", &self.records.len())
            .field("by_local_code", &self.by_local_code.len())
            .field("by_target_code", &self.by_target_code.len())
            .field("by_category", &self.by_category.len())
            .finish()
    }
}

impl CodeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-allocated capacity.
    pub fn with_capacity(record_count: usize) -> Self {
        Self {
            records: Vec::with_capacity(record_count),
            by_local_code: HashMap::with_capacity(record_count),
            by_target_code: HashMap::with_capacity(record_count),
            by_category: HashMap::new(),
        }
    }

    /// Loads records from a CSV file.
    ///
    /// Malformed rows are skipped and counted in [`LoadStats::error_count`].
    pub fn load_csv<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoaderConfig,
    ) -> LoadResult<LoadStats> {
        let parser = CodeRecordParser::from_path(path)?;
        let mut stats = LoadStats::default();

        for result in parser {
            stats.total_records += 1;
            match result {
                Ok(record) => self.admit(record, config, &mut stats),
                Err(e) => {
                    tracing::warn!(row = stats.total_records, error = %e, "skipping malformed row");
                    stats.error_count += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Loads records from a JSON array file.
    ///
    /// Invalid records are skipped and counted in [`LoadStats::error_count`].
    pub fn load_json<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoaderConfig,
    ) -> LoadResult<LoadStats> {
        let records = read_json_file(path)?;
        let mut stats = LoadStats {
            total_records: records.len(),
            ..Default::default()
        };

        for (index, record) in records.into_iter().enumerate() {
            match validate(record) {
                Ok(record) => self.admit(record, config, &mut stats),
                Err(e) => {
                    tracing::warn!(record = index + 1, error = %e, "skipping invalid record");
                    stats.error_count += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Loads a `.csv` or `.json` file, chosen by extension.
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        config: &LoaderConfig,
    ) -> LoadResult<LoadStats> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => self.load_csv(path, config),
            Some("json") => self.load_json(path, config),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    fn admit(&mut self, record: CodeRecord, config: &LoaderConfig, stats: &mut LoadStats) {
        if record.passes_filter(config) {
            self.insert(record);
            stats.loaded_records += 1;
        } else {
            stats.skipped_records += 1;
        }
    }

    /// Inserts records directly (useful for testing).
    pub fn insert_records(&mut self, records: impl IntoIterator<Item = CodeRecord>) {
        for record in records {
            self.insert(record);
        }
    }

    fn insert(&mut self, record: CodeRecord) {
        let position = self.records.len();

        self.by_local_code
            .entry(record.local_code.clone())
            .or_default()
            .push(position);
        if let Some(target) = record.mapped_target_code() {
            self.by_target_code
                .entry(target.to_string())
                .or_default()
                .push(position);
        }
        self.by_category
            .entry(record.category.clone())
            .or_default()
            .push(position);

        self.records.push(record);
    }

    // Query methods

    /// Best record for a local code: highest confidence, then lowest id.
    pub fn best_for_local_code(&self, code: &str) -> Option<&CodeRecord> {
        self.by_local_code
            .get(code)?
            .iter()
            .map(|&i| &self.records[i])
            .max_by(|a, b| {
                a.ranking_score()
                    .total_cmp(&b.ranking_score())
                    .then_with(|| b.id.cmp(&a.id))
            })
    }

    /// Records whose local or TM2 code equals `code`, in load order.
    pub fn with_any_code(&self, code: &str) -> Vec<&CodeRecord> {
        let mut positions: Vec<usize> = self
            .by_local_code
            .get(code)
            .into_iter()
            .chain(self.by_target_code.get(code))
            .flatten()
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();

        positions.into_iter().map(|i| &self.records[i]).collect()
    }

    /// First record, in load order, mapped to this TM2 code.
    pub fn first_with_target(&self, code: &str) -> Option<&CodeRecord> {
        let first = *self.by_target_code.get(code)?.first()?;
        Some(&self.records[first])
    }

    /// Records of a category, in load order.
    pub fn in_category(&self, category: &Category) -> Vec<&CodeRecord> {
        self.by_category
            .get(category)
            .map(|positions| positions.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// Records whose title starts with `term`, then those merely containing it.
    ///
    /// Matching is case-insensitive; each half keeps load order.
    pub fn titles_matching(&self, term: &str) -> Vec<&CodeRecord> {
        let term = term.to_lowercase();
        let mut prefixed = Vec::new();
        let mut containing = Vec::new();

        for record in &self.records {
            match record.local_title.to_lowercase().find(&term) {
                Some(0) => prefixed.push(record),
                Some(_) => containing.push(record),
                None => {}
            }
        }

        prefixed.extend(containing);
        prefixed
    }

    /// Records whose description or TM2 definition matches `pattern`.
    pub fn matching_text(&self, pattern: &Regex) -> Vec<&CodeRecord> {
        #[cfg(feature = "parallel")]
        {
            self.records
                .par_iter()
                .filter(|record| text_matches(record, pattern))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.records
                .iter()
                .filter(|record| text_matches(record, pattern))
                .collect()
        }
    }

    /// All records sorted by title.
    pub fn sorted_by_title(&self) -> Vec<&CodeRecord> {
        let mut records: Vec<&CodeRecord> = self.records.iter().collect();
        records.sort_by(|a, b| a.local_title.cmp(&b.local_title));
        records
    }

    /// Returns the number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of records carrying a TM2 mapping.
    pub fn mapped_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_mapping()).count()
    }

    /// Returns the number of distinct categories.
    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Returns the number of distinct TM2 codes.
    pub fn target_code_count(&self) -> usize {
        self.by_target_code.len()
    }
}

fn text_matches(record: &CodeRecord, pattern: &Regex) -> bool {
    record
        .local_description
        .as_deref()
        .is_some_and(|text| pattern.is_match(text))
        || record
            .target_definition
            .as_deref()
            .is_some_and(|text| pattern.is_match(text))
}
