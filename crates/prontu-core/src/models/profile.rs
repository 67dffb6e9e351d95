//! Connection profile for the managed document database.

use serde::{Deserialize, Serialize};

use crate::util::normalize_field;

/// Collection records are written to when the user leaves the field untouched.
pub const DEFAULT_COLLECTION: &str = "medical_records";

/// Profile fields that must be filled before a save is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    ProjectId,
    ApiKey,
    AuthDomain,
    Collection,
}

impl ProfileField {
    /// Label used when the field is reported missing to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectId => "ID do projeto",
            Self::ApiKey => "Chave de API",
            Self::AuthDomain => "Domínio de autenticação",
            Self::Collection => "Nome da coleção",
        }
    }
}

/// Endpoint and credential settings for the managed document database.
///
/// The six credential fields mirror the service's client-configuration shape;
/// `collection` names where records land. Exactly one profile exists and is
/// overwritten wholesale on every validated save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for ConnectionProfile {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: String::new(),
            project_id: String::new(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
            collection: default_collection(),
        }
    }
}

impl ConnectionProfile {
    /// Returns a copy with surrounding whitespace stripped from every field.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            api_key: normalize_field(&self.api_key),
            auth_domain: normalize_field(&self.auth_domain),
            project_id: normalize_field(&self.project_id),
            storage_bucket: normalize_field(&self.storage_bucket),
            messaging_sender_id: normalize_field(&self.messaging_sender_id),
            app_id: normalize_field(&self.app_id),
            collection: normalize_field(&self.collection),
        }
    }

    /// Required fields that are still empty, in display order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<ProfileField> {
        let mut missing = Vec::new();
        if normalize_field(&self.project_id).is_empty() {
            missing.push(ProfileField::ProjectId);
        }
        if normalize_field(&self.api_key).is_empty() {
            missing.push(ProfileField::ApiKey);
        }
        if normalize_field(&self.auth_domain).is_empty() {
            missing.push(ProfileField::AuthDomain);
        }
        if normalize_field(&self.collection).is_empty() {
            missing.push(ProfileField::Collection);
        }
        missing
    }

    /// Whether every required field is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}
