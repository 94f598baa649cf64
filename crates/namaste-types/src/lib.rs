//! # namaste-types
//!
//! Type definitions for NAMASTE traditional-medicine terminology and its
//! mapping to ICD-11 TM2 codes.
//!
//! This crate provides the record type shared by the loader, the resolver and
//! the HTTP service, plus the disease-grouping types produced by grouped
//! symptom searches.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Field names follow the terminology service's JSON (`code`, `tm2Code`,
//!   `confidenceScore`, ...). Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use namaste_types::{Category, CodeRecord, DiseaseGroup};
//!
//! let record = CodeRecord::new("1", "AAE-7", "Kasa", Category::Ayurveda)
//!     .with_description("Persistent dry cough")
//!     .with_target("SF6A", "Cough disorder (TM2)")
//!     .with_confidence(0.92);
//!
//! let group = DiseaseGroup::seeded_by("SF6A", record);
//! assert_eq!(group.member_count(), 1);
//! assert_eq!(group.similarity_score, Some(0.92));
//! ```

#![warn(missing_docs)]

mod category;
mod group;
mod record;

// Re-export all public types at crate root
pub use category::Category;
pub use group::{DiseaseGroup, GroupedMatches, GroupedResult};
pub use record::CodeRecord;
