//! JSON export loader.
//!
//! Reads a JSON array of records in the terminology service's wire shape
//! (`code`, `codeTitle`, `tm2Code`, `confidenceScore`, ...). Records go
//! through the same checks as CSV rows.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use namaste_types::CodeRecord;

use crate::record::validate;
use crate::types::{LoadError, LoadResult};

/// Parses a JSON array of code records from a reader, failing on the first
/// invalid record.
pub fn parse_json_records<R: Read>(reader: R) -> LoadResult<Vec<CodeRecord>> {
    serde_json::from_reader::<_, Vec<CodeRecord>>(reader)?
        .into_iter()
        .map(validate)
        .collect()
}

/// Parses a JSON array of code records from a file, failing on the first
/// invalid record.
pub fn parse_json_file<P: AsRef<Path>>(path: P) -> LoadResult<Vec<CodeRecord>> {
    read_json_file(path)?.into_iter().map(validate).collect()
}

/// Reads a JSON array file as-is; each record still needs [`validate`].
pub(crate) fn read_json_file<P: AsRef<Path>>(path: P) -> LoadResult<Vec<CodeRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}
