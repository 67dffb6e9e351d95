//! Shared test doubles for the storage and remote seams.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Error as CoreError;
use crate::models::ConnectionProfile;
use crate::profile::ProfileStorage;
use crate::remote::{DocumentConnection, DocumentFields, DocumentStore, RemoteError, RemoteResult};

/// One recorded call against the fake document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Open,
    Write {
        collection: String,
        fields: DocumentFields,
    },
    Delete {
        collection: String,
        document_id: String,
    },
}

/// In-memory document store that records every call and fails on demand.
#[derive(Debug, Clone, Default)]
pub struct FakeDocumentStore {
    fail_open: bool,
    fail_write: bool,
    fail_delete: bool,
    document_id: String,
    calls: Rc<RefCell<Vec<StoreCall>>>,
}

impl FakeDocumentStore {
    pub fn new() -> Self {
        Self {
            document_id: "doc-1".to_string(),
            ..Self::default()
        }
    }

    pub fn with_document_id(mut self, document_id: &str) -> Self {
        self.document_id = document_id.to_string();
        self
    }

    pub fn failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    pub fn failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }
}

impl DocumentStore for FakeDocumentStore {
    type Connection = FakeConnection;

    async fn open(&self, _profile: &ConnectionProfile) -> RemoteResult<Self::Connection> {
        self.calls.borrow_mut().push(StoreCall::Open);
        if self.fail_open {
            return Err(remote_failure("open refused"));
        }
        Ok(FakeConnection { store: self.clone() })
    }
}

/// Connection handed out by [`FakeDocumentStore`].
#[derive(Debug, Clone)]
pub struct FakeConnection {
    store: FakeDocumentStore,
}

impl DocumentConnection for FakeConnection {
    async fn write_document(
        &self,
        collection: &str,
        fields: DocumentFields,
    ) -> RemoteResult<String> {
        self.store.calls.borrow_mut().push(StoreCall::Write {
            collection: collection.to_string(),
            fields,
        });
        if self.store.fail_write {
            return Err(remote_failure("write refused"));
        }
        Ok(self.store.document_id.clone())
    }

    async fn delete_document(&self, collection: &str, document_id: &str) -> RemoteResult<()> {
        self.store.calls.borrow_mut().push(StoreCall::Delete {
            collection: collection.to_string(),
            document_id: document_id.to_string(),
        });
        if self.store.fail_delete {
            return Err(remote_failure("delete refused"));
        }
        Ok(())
    }
}

fn remote_failure(message: &str) -> RemoteError {
    RemoteError::Api {
        status: 503,
        message: message.to_string(),
    }
}

/// In-memory profile storage that fails on demand.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStorage {
    fail_load: bool,
    fail_save: bool,
    profile: Rc<RefCell<Option<ConnectionProfile>>>,
}

impl MemoryProfileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ConnectionProfile) -> Self {
        Self {
            profile: Rc::new(RefCell::new(Some(profile))),
            ..Self::default()
        }
    }

    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<ConnectionProfile> {
        self.profile.borrow().clone()
    }
}

impl ProfileStorage for MemoryProfileStorage {
    fn load(&self) -> Result<Option<ConnectionProfile>, CoreError> {
        if self.fail_load {
            return Err(CoreError::Storage("profile load refused".to_string()));
        }
        Ok(self.profile.borrow().clone())
    }

    fn save(&self, profile: &ConnectionProfile) -> Result<(), CoreError> {
        if self.fail_save {
            return Err(CoreError::Storage("profile save refused".to_string()));
        }
        *self.profile.borrow_mut() = Some(profile.clone());
        Ok(())
    }
}
