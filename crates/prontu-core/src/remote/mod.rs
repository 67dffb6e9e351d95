//! Remote document database seam.
//!
//! The profile and record flows talk to storage through the [`DocumentStore`]
//! and [`DocumentConnection`] traits with neutral typed field values, so the
//! wire protocol stays inside the one production implementation
//! ([`FirestoreClient`]). Tests substitute an in-memory store that records
//! calls.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::ConnectionProfile;

mod firestore;

pub use firestore::{FirestoreClient, FirestoreConnection};

/// A typed document field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Timestamp(DateTime<Utc>),
}

/// Fields of one document, keyed by wire-visible name.
pub type DocumentFields = BTreeMap<String, FieldValue>;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Invalid connection profile: {0}")]
    InvalidProfile(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Document API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected document API payload: {0}")]
    UnexpectedPayload(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// Opens connections to a document database from a connection profile.
pub trait DocumentStore {
    type Connection: DocumentConnection;

    /// Validates the profile and opens a connection bound to it.
    async fn open(&self, profile: &ConnectionProfile) -> RemoteResult<Self::Connection>;
}

/// A connection capable of writing and deleting single documents.
pub trait DocumentConnection {
    /// Writes one new document and returns its server-assigned identifier.
    async fn write_document(
        &self,
        collection: &str,
        fields: DocumentFields,
    ) -> RemoteResult<String>;

    /// Deletes one document by identifier.
    async fn delete_document(&self, collection: &str, document_id: &str) -> RemoteResult<()>;
}
