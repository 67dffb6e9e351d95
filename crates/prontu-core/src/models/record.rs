//! Record draft and the document written on submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::remote::{DocumentFields, FieldValue};

/// Wire-visible field names of a stored record document.
pub const FIELD_EXAM_IMAGE: &str = "imagem_exame";
pub const FIELD_EXAM_REPORT: &str = "laudo_exame";
pub const FIELD_DESCRIPTION: &str = "descricao";
pub const FIELD_SUBMITTED_AT: &str = "enviado_em";

/// Record fields that must be filled before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    ExamImage,
    ExamReport,
    Description,
}

impl RecordField {
    /// Label used when the field is reported missing to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExamImage => "Imagem do exame",
            Self::ExamReport => "Laudo do exame",
            Self::Description => "Descrição",
        }
    }
}

/// In-memory state of the record form.
///
/// Attachments hold encoded data URIs; the empty string means "not attached".
/// The draft never touches storage and is reset to empty only after a
/// submission fully succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub exam_image: String,
    pub exam_report: String,
    pub description: String,
}

impl RecordDraft {
    /// Fields that are still empty, in display order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<RecordField> {
        let mut missing = Vec::new();
        if self.exam_image.is_empty() {
            missing.push(RecordField::ExamImage);
        }
        if self.exam_report.is_empty() {
            missing.push(RecordField::ExamReport);
        }
        if self.description.trim().is_empty() {
            missing.push(RecordField::Description);
        }
        missing
    }

    /// Whether all three fields are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Resets every field to empty. Safe to call repeatedly.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A complete record as written to the remote collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewRecord {
    pub exam_image: String,
    pub exam_report: String,
    pub description: String,
    pub submitted_at: DateTime<Utc>,
}

impl NewRecord {
    /// Builds the document from a complete draft and the submission instant.
    #[must_use]
    pub fn from_draft(draft: &RecordDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            exam_image: draft.exam_image.clone(),
            exam_report: draft.exam_report.clone(),
            description: draft.description.trim().to_string(),
            submitted_at,
        }
    }

    /// The document's typed fields, keyed by wire name.
    #[must_use]
    pub fn to_fields(&self) -> DocumentFields {
        DocumentFields::from([
            (
                FIELD_EXAM_IMAGE.to_string(),
                FieldValue::Text(self.exam_image.clone()),
            ),
            (
                FIELD_EXAM_REPORT.to_string(),
                FieldValue::Text(self.exam_report.clone()),
            ),
            (
                FIELD_DESCRIPTION.to_string(),
                FieldValue::Text(self.description.clone()),
            ),
            (
                FIELD_SUBMITTED_AT.to_string(),
                FieldValue::Timestamp(self.submitted_at),
            ),
        ])
    }
}
