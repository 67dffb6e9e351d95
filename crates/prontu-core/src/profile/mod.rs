//! Connection profile persistence and the validated save flow.
//!
//! The app keeps exactly one profile, stored as one JSON file under the
//! per-user data directory. A profile is only ever written through
//! [`save_profile`], which proves the credentials against the live service
//! first: write one throwaway marker document, delete it, and persist only
//! when both calls succeed.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::error::Error as CoreError;
use crate::models::{ConnectionProfile, ProfileField};
use crate::remote::{DocumentConnection, DocumentFields, DocumentStore, FieldValue, RemoteError};

const PROFILE_FILE: &str = "connection-profile.json";
const MARKER_PURPOSE: &str = "verificacao_conexao";

/// Loads and saves the single connection profile.
pub trait ProfileStorage {
    /// Returns the stored profile, or `None` when none was saved yet.
    fn load(&self) -> Result<Option<ConnectionProfile>, CoreError>;

    /// Overwrites the stored profile wholesale.
    fn save(&self, profile: &ConnectionProfile) -> Result<(), CoreError>;
}

#[derive(Debug, Error)]
pub enum SaveProfileError {
    #[error("Required profile fields are missing")]
    MissingFields(Vec<ProfileField>),
    #[error("Connection check failed: {0}")]
    ConnectionFailed(#[from] RemoteError),
    #[error("Failed to persist the connection profile: {0}")]
    Storage(#[from] CoreError),
}

/// Validates and persists a connection profile.
///
/// Refuses with the list of missing required fields before any I/O. Otherwise
/// proves the profile with a live round trip (open, write a marker document,
/// delete it); any failing stage leaves storage untouched. On success the
/// normalized profile is persisted and returned.
pub async fn save_profile<S: DocumentStore>(
    store: &S,
    storage: &impl ProfileStorage,
    profile: &ConnectionProfile,
) -> Result<ConnectionProfile, SaveProfileError> {
    let profile = profile.normalized();
    let missing = profile.missing_required();
    if !missing.is_empty() {
        return Err(SaveProfileError::MissingFields(missing));
    }

    verify_round_trip(store, &profile).await?;

    storage.save(&profile)?;
    tracing::debug!(
        "Connection profile saved for project {}",
        profile.project_id
    );
    Ok(profile)
}

async fn verify_round_trip<S: DocumentStore>(
    store: &S,
    profile: &ConnectionProfile,
) -> Result<(), RemoteError> {
    let connection = store.open(profile).await?;
    let token = Uuid::new_v4().to_string();
    let document_id = connection
        .write_document(&profile.collection, marker_fields(&token, Utc::now()))
        .await?;
    connection
        .delete_document(&profile.collection, &document_id)
        .await
}

fn marker_fields(token: &str, created_at: DateTime<Utc>) -> DocumentFields {
    DocumentFields::from([
        (
            "finalidade".to_string(),
            FieldValue::Text(MARKER_PURPOSE.to_string()),
        ),
        ("token".to_string(), FieldValue::Text(token.to_string())),
        ("criado_em".to_string(), FieldValue::Timestamp(created_at)),
    ])
}

/// Profile storage backed by one JSON file in the per-user data directory.
#[derive(Debug, Clone)]
pub struct JsonFileProfileStorage {
    path: PathBuf,
}

impl Default for JsonFileProfileStorage {
    fn default() -> Self {
        Self::new(default_profile_path())
    }
}

impl JsonFileProfileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStorage for JsonFileProfileStorage {
    fn load(&self) -> Result<Option<ConnectionProfile>, CoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(profile) => Ok(Some(profile)),
            Err(error) => {
                // A profile that no longer parses is treated as never saved.
                tracing::warn!(
                    "Failed to parse connection profile at {}: {}",
                    self.path.display(),
                    error
                );
                Ok(None)
            }
        }
    }

    fn save(&self, profile: &ConnectionProfile) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

pub fn default_profile_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prontu")
        .join(PROFILE_FILE)
}
