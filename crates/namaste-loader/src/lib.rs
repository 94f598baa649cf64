//! # namaste-loader
//!
//! Loads NAMASTE to ICD-11 TM2 mapping files into an in-memory [`CodeStore`].
//!
//! Two file formats are accepted:
//!
//! - CSV with the header listed in [`CODE_RECORD_COLUMNS`].
//! - A JSON array of records in the terminology service's wire shape.
//!
//! `CodeStore` implements the resolver's `RecordStore`, so a loaded store can
//! be handed straight to a `TerminologyResolver`.
//!
//! ## Features
//!
//! - `parallel` (default): free-text scans use rayon.

#![warn(missing_docs)]

mod json;
mod parser;
mod record;
mod record_store;
mod store;
mod types;

pub use json::{parse_json_file, parse_json_records};
pub use parser::{parse, CodeRecordParser};
pub use record::{RecordFilter, CODE_RECORD_COLUMNS};
pub use store::CodeStore;
pub use types::{LoadError, LoadResult, LoadStats, LoaderConfig};

// Re-export namaste-types for convenience
pub use namaste_types;
