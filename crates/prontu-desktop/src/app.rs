//! Main application component

use dioxus::prelude::*;

use prontu_core::profile::{JsonFileProfileStorage, ProfileStorage};
use prontu_core::remote::FirestoreClient;
use prontu_core::ConnectionProfile;

use crate::components::{RecordForm, SettingsForm};
use crate::state::{AppState, AppTab};
use crate::ui::{ButtonVariant, UiButton, UI_STYLES};

/// Root application component
#[component]
pub fn App() -> Element {
    let mut active_tab = use_signal(|| AppTab::Records);
    let mut active_profile = use_signal(|| None::<ConnectionProfile>);
    let mut remote = use_signal(|| None::<FirestoreClient>);
    let storage = use_signal(JsonFileProfileStorage::default);
    let mut status_message = use_signal(|| None::<String>);
    let mut initialized = use_signal(|| false);

    // Load the stored profile and build the remote client (only once)
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true); // Mark immediately to prevent double init

        match storage.read().load() {
            Ok(profile) => active_profile.set(profile),
            Err(error) => {
                tracing::warn!("Failed to load the stored connection profile: {}", error);
            }
        }

        match FirestoreClient::new() {
            Ok(client) => remote.set(Some(client)),
            Err(error) => {
                tracing::error!("Failed to build the remote client: {}", error);
                status_message.set(Some(
                    "Não foi possível iniciar o cliente de conexão.".to_string(),
                ));
            }
        }
    });

    let state = use_context_provider(|| AppState {
        active_tab,
        active_profile,
        remote,
        storage,
        status_message,
    });

    let current_tab = active_tab();
    let (indicator_color, indicator_label) = if state.is_connected() {
        ("#059669", "Conectado")
    } else {
        ("#9ca3af", "Não configurado")
    };
    let records_variant = if current_tab == AppTab::Records {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };
    let settings_variant = if current_tab == AppTab::Settings {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        style { "{UI_STYLES}" }

        div {
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                background: #f6f8fb;
                color: #111827;
                font-family: system-ui, sans-serif;
            ",

            div {
                style: "
                    padding: 14px 20px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: #ffffff;
                    border-bottom: 1px solid #e5e7eb;
                ",
                h1 {
                    style: "margin: 0; font-size: 20px;",
                    "Prontu"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span {
                        style: "width: 8px; height: 8px; border-radius: 50%; background: {indicator_color};",
                    }
                    span {
                        style: "font-size: 12px; color: #4b5563;",
                        "{indicator_label}"
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; padding: 12px 20px 0 20px;",
                UiButton {
                    variant: records_variant,
                    onclick: move |_| active_tab.set(AppTab::Records),
                    "Dados Médicos"
                }
                UiButton {
                    variant: settings_variant,
                    onclick: move |_| active_tab.set(AppTab::Settings),
                    "Configurações"
                }
            }

            if let Some(message) = status_message() {
                p {
                    style: "margin: 12px 20px 0 20px; font-size: 13px; color: #374151;",
                    "{message}"
                }
            }

            div {
                style: "flex: 1; padding: 16px 20px 24px 20px; overflow-y: auto;",
                if current_tab == AppTab::Records {
                    RecordForm {}
                } else {
                    SettingsForm {}
                }
            }
        }
    }
}
