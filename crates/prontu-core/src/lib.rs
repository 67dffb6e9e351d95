//! prontu-core - Core library for Prontu
//!
//! This crate contains the shared models, attachment encoding, connection
//! profile persistence, and the document-database client used by the desktop
//! app.

pub mod encoding;
pub mod error;
pub mod models;
pub mod ops;
pub mod profile;
pub mod records;
pub mod remote;
pub mod util;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use models::{ConnectionProfile, RecordDraft};
