//! Data models for Prontu

mod profile;
mod record;

pub use profile::{ConnectionProfile, ProfileField, DEFAULT_COLLECTION};
pub use record::{
    NewRecord, RecordDraft, RecordField, FIELD_DESCRIPTION, FIELD_EXAM_IMAGE, FIELD_EXAM_REPORT,
    FIELD_SUBMITTED_AT,
};
