//! # namaste-service
//!
//! HTTP service for NAMASTE to ICD-11 TM2 terminology queries.
//!
//! This crate exposes a [`TerminologyResolver`](namaste_resolver::TerminologyResolver)
//! over records loaded by the namaste-loader crate.
//!
//! ## APIs
//!
//! - `/api/terminology/*`: public endpoints. Every answer is HTTP 200 with a
//!   `{success, message, errorCode, data}` envelope.
//! - `/internal/terminology/*`: service-to-service endpoints returning raw
//!   JSON, with 404/503/504 on failure.
//!
//! Store queries run on the blocking pool under a per-query timeout.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
mod router;
mod server;

#[cfg(test)]
mod testing;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use response::{GroupedSearchData, TerminologyResponse};
pub use router::terminology_router;
pub use server::{SharedResolver, TerminologyServer};
