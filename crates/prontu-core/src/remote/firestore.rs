//! Firestore REST implementation of the document store seam.
//!
//! Talks to the managed database's REST surface directly: one POST to create
//! a document in a collection, one DELETE to remove it. Requests authenticate
//! with the profile's API key as a query parameter, and field values travel
//! in the service's typed-JSON encoding.

use std::fmt;

use chrono::SecondsFormat;
use serde::Deserialize;

use crate::models::ConnectionProfile;
use crate::remote::{
    DocumentConnection, DocumentFields, DocumentStore, FieldValue, RemoteError, RemoteResult,
};
use crate::util::{compact_text, normalize_field};

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Opens [`FirestoreConnection`]s bound to a connection profile.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: reqwest::Client,
}

impl FirestoreClient {
    pub fn new() -> RemoteResult<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
        })
    }
}

impl DocumentStore for FirestoreClient {
    type Connection = FirestoreConnection;

    async fn open(&self, profile: &ConnectionProfile) -> RemoteResult<Self::Connection> {
        let project_id = normalize_field(&profile.project_id);
        if project_id.is_empty() {
            return Err(RemoteError::InvalidProfile("project id must not be empty"));
        }
        let api_key = normalize_field(&profile.api_key);
        if api_key.is_empty() {
            return Err(RemoteError::InvalidProfile("API key must not be empty"));
        }

        Ok(FirestoreConnection {
            client: self.client.clone(),
            documents_url: documents_url(&project_id),
            api_key,
        })
    }
}

/// A connection to one project's document collection tree.
#[derive(Clone)]
pub struct FirestoreConnection {
    client: reqwest::Client,
    documents_url: String,
    api_key: String,
}

impl DocumentConnection for FirestoreConnection {
    async fn write_document(
        &self,
        collection: &str,
        fields: DocumentFields,
    ) -> RemoteResult<String> {
        let url = format!(
            "{}/{}?key={}",
            self.documents_url,
            urlencoding::encode(collection),
            urlencoding::encode(&self.api_key)
        );
        let body = serde_json::json!({ "fields": encode_fields(&fields) });

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let document = response
            .json::<DocumentResource>()
            .await
            .map_err(|error| RemoteError::UnexpectedPayload(error.to_string()))?;
        document_id_from_name(&document.name)
            .map(std::string::ToString::to_string)
            .ok_or_else(|| {
                RemoteError::UnexpectedPayload(format!(
                    "document name without identifier: {}",
                    document.name
                ))
            })
    }

    async fn delete_document(&self, collection: &str, document_id: &str) -> RemoteResult<()> {
        let url = format!(
            "{}/{}/{}?key={}",
            self.documents_url,
            urlencoding::encode(collection),
            urlencoding::encode(document_id),
            urlencoding::encode(&self.api_key)
        );

        let response = self.client.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}

impl fmt::Debug for FirestoreConnection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FirestoreConnection")
            .field("documents_url", &self.documents_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DocumentResource {
    name: String,
}

fn documents_url(project_id: &str) -> String {
    format!(
        "{FIRESTORE_BASE_URL}/projects/{}/databases/(default)/documents",
        urlencoding::encode(project_id)
    )
}

fn encode_fields(fields: &DocumentFields) -> serde_json::Value {
    let mut encoded = serde_json::Map::new();
    for (name, value) in fields {
        encoded.insert(name.clone(), encode_field_value(value));
    }
    serde_json::Value::Object(encoded)
}

fn encode_field_value(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Text(text) => serde_json::json!({ "stringValue": text }),
        FieldValue::Timestamp(instant) => serde_json::json!({
            "timestampValue": instant.to_rfc3339_opts(SecondsFormat::Millis, true)
        }),
    }
}

/// Extracts the document identifier from a full resource name such as
/// `projects/p/databases/(default)/documents/medical_records/abc123`.
fn document_id_from_name(name: &str) -> Option<&str> {
    name.rsplit('/').find(|segment| !segment.is_empty())
}

async fn api_error(response: reqwest::Response) -> RemoteError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    RemoteError::Api {
        status,
        message: compact_text(&body),
    }
}
