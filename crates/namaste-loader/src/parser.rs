//! Streaming CSV parser for code record files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use namaste_types::CodeRecord;

use crate::record::{from_record, CODE_RECORD_COLUMNS};
use crate::types::{LoadError, LoadResult};

/// A streaming parser for code record CSV files.
///
/// Reads one row at a time. Filtering is left to the caller.
pub struct CodeRecordParser<R: Read> {
    reader: Reader<R>,
    records_read: usize,
}

impl CodeRecordParser<BufReader<File>> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> CodeRecordParser<R> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> LoadResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
        })
    }

    /// Validates that the file has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> LoadResult<()> {
        let headers = reader.headers()?;
        let expected = CODE_RECORD_COLUMNS;

        if headers.len() < expected.len() {
            return Err(LoadError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}').trim();
            if found != *expected_col {
                return Err(LoadError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of rows read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Parses every row, failing on the first malformed one.
    pub fn parse_all(self) -> LoadResult<Vec<CodeRecord>> {
        self.collect()
    }
}

impl<R: Read> Iterator for CodeRecordParser<R> {
    type Item = LoadResult<CodeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    // Skip empty records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }
                    self.records_read += 1;
                    return Some(from_record(&record));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing field values.
pub mod parse {
    use super::{LoadError, LoadResult};

    /// Returns the trimmed value, or `None` if it is blank.
    pub fn optional_text(value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// Returns the trimmed value, failing if it is blank.
    pub fn required_text(value: &str, field: &'static str) -> LoadResult<String> {
        optional_text(value).ok_or(LoadError::MissingField { field })
    }

    /// Parses an optional confidence score in `[0, 1]`.
    pub fn confidence_score(value: &str) -> LoadResult<Option<f64>> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }

        match value.parse::<f64>() {
            Ok(score) if (0.0..=1.0).contains(&score) => Ok(Some(score)),
            _ => Err(LoadError::InvalidScore {
                value: value.to_string(),
            }),
        }
    }
}
