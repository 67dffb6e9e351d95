//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use prontu_core::profile::JsonFileProfileStorage;
use prontu_core::remote::FirestoreClient;
use prontu_core::ConnectionProfile;

/// Top-level tabs of the page shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTab {
    Records,
    Settings,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Currently visible tab; not persisted across restarts.
    pub active_tab: Signal<AppTab>,
    /// Profile loaded from storage or saved during this session.
    pub active_profile: Signal<Option<ConnectionProfile>>,
    /// Remote client; `None` when the HTTP client failed to build.
    pub remote: Signal<Option<FirestoreClient>>,
    /// Profile storage backed by the per-user data directory.
    pub storage: Signal<JsonFileProfileStorage>,
    /// Transient shell-level notice shown under the header.
    pub status_message: Signal<Option<String>>,
}

impl AppState {
    /// Whether the connected indicator should show. Reflects stored state
    /// only; no remote check is involved.
    pub fn is_connected(&self) -> bool {
        (self.active_profile)().is_some()
    }
}
