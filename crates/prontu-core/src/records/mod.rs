//! Record submission flow.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::error::Error as CoreError;
use crate::models::{NewRecord, RecordDraft, RecordField};
use crate::profile::ProfileStorage;
use crate::remote::{DocumentConnection, DocumentStore, RemoteError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("No connection profile is saved")]
    ProfileRequired,
    #[error("Required record fields are missing")]
    MissingFields(Vec<RecordField>),
    #[error("Record write failed: {0}")]
    Remote(#[from] RemoteError),
    #[error("Failed to read the connection profile: {0}")]
    Storage(#[from] CoreError),
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Identifier assigned by the remote database to the new document.
    pub document_id: String,
}

/// Writes one record document to the configured collection.
///
/// Refuses before any remote call when no profile is persisted or when any
/// draft field is empty. Otherwise opens a connection with the stored profile
/// and performs exactly one write; the caller resets the draft only after a
/// success comes back.
pub async fn submit_record<S: DocumentStore>(
    store: &S,
    storage: &impl ProfileStorage,
    draft: &RecordDraft,
    submitted_at: DateTime<Utc>,
) -> Result<SubmitReceipt, SubmitError> {
    let Some(profile) = storage.load()? else {
        return Err(SubmitError::ProfileRequired);
    };

    let missing = draft.missing_fields();
    if !missing.is_empty() {
        return Err(SubmitError::MissingFields(missing));
    }

    let record = NewRecord::from_draft(draft, submitted_at);
    let connection = store.open(&profile).await?;
    let document_id = connection
        .write_document(&profile.collection, record.to_fields())
        .await?;
    tracing::debug!("Record stored as document {document_id}");
    Ok(SubmitReceipt { document_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConnectionProfile, DEFAULT_COLLECTION, FIELD_SUBMITTED_AT};
    use crate::remote::FieldValue;
    use crate::testing::{FakeDocumentStore, MemoryProfileStorage, StoreCall};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn stored_profile() -> ConnectionProfile {
        ConnectionProfile {
            api_key: "AIzaTestKey".to_string(),
            auth_domain: "clinic.firebaseapp.com".to_string(),
            project_id: "clinic".to_string(),
            ..ConnectionProfile::default()
        }
    }

    fn full_draft() -> RecordDraft {
        RecordDraft {
            exam_image: "data:image/png;base64,aW1n".to_string(),
            exam_report: "data:image/jpeg;base64,bGF1ZG8=".to_string(),
            description: "Raio-X do tórax, sem alterações.".to_string(),
        }
    }

    fn submission_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 14, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn submit_without_profile_makes_zero_remote_calls() {
        let store = FakeDocumentStore::new();
        let storage = MemoryProfileStorage::new();

        let error = submit_record(&store, &storage, &full_draft(), submission_instant())
            .await
            .expect_err("submit should refuse");
        assert!(matches!(error, SubmitError::ProfileRequired));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn submit_refuses_every_incomplete_draft() {
        for mask in 0_u8..7 {
            let store = FakeDocumentStore::new();
            let storage = MemoryProfileStorage::with_profile(stored_profile());
            let full = full_draft();
            let draft = RecordDraft {
                exam_image: if mask & 1 == 0 {
                    String::new()
                } else {
                    full.exam_image.clone()
                },
                exam_report: if mask & 2 == 0 {
                    String::new()
                } else {
                    full.exam_report.clone()
                },
                description: if mask & 4 == 0 {
                    String::new()
                } else {
                    full.description.clone()
                },
            };

            let error = submit_record(&store, &storage, &draft, submission_instant())
                .await
                .expect_err("submit should refuse");
            match error {
                SubmitError::MissingFields(missing) => {
                    assert_eq!(missing, draft.missing_fields());
                    assert!(!missing.is_empty());
                }
                other => panic!("unexpected error for mask {mask}: {other:?}"),
            }
            assert!(store.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn submit_writes_exactly_one_document() {
        let store = FakeDocumentStore::new().with_document_id("rec-42");
        let storage = MemoryProfileStorage::with_profile(stored_profile());

        let receipt = submit_record(&store, &storage, &full_draft(), submission_instant())
            .await
            .expect("submit should succeed");
        assert_eq!(receipt.document_id, "rec-42");

        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], StoreCall::Open);
        match &calls[1] {
            StoreCall::Write { collection, fields } => {
                assert_eq!(collection, DEFAULT_COLLECTION);
                assert_eq!(fields.len(), 4);
                assert_eq!(
                    fields.get(FIELD_SUBMITTED_AT),
                    Some(&FieldValue::Timestamp(submission_instant()))
                );
            }
            other => panic!("unexpected call: {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_surfaces_remote_write_failure() {
        let store = FakeDocumentStore::new().failing_write();
        let storage = MemoryProfileStorage::with_profile(stored_profile());

        let error = submit_record(&store, &storage, &full_draft(), submission_instant())
            .await
            .expect_err("submit should fail");
        assert!(matches!(error, SubmitError::Remote(_)));
    }

    #[tokio::test]
    async fn submit_surfaces_storage_read_failure() {
        let store = FakeDocumentStore::new();
        let storage = MemoryProfileStorage::failing_load();

        let error = submit_record(&store, &storage, &full_draft(), submission_instant())
            .await
            .expect_err("submit should fail");
        assert!(matches!(error, SubmitError::Storage(_)));
        assert!(store.calls().is_empty());
    }
}
