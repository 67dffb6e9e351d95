use dioxus::prelude::*;

use prontu_core::models::{ProfileField, DEFAULT_COLLECTION};
use prontu_core::ops::{transition_op_phase, OpEvent, OpPhase};
use prontu_core::profile::{save_profile, ProfileStorage, SaveProfileError};

use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton, UiInput};

const MSG_SAVED: &str = "Conexão verificada e configurações salvas.";
const MSG_CLIENT_UNAVAILABLE: &str = "O cliente de conexão não está disponível.";
const MSG_CONNECTION_FAILED: &str =
    "Não foi possível conectar com as credenciais informadas. Verifique os dados e tente novamente.";
const MSG_STORAGE_FAILED: &str = "Não foi possível salvar as configurações no dispositivo.";

fn missing_fields_message(fields: &[ProfileField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    format!("Preencha os campos obrigatórios: {}.", labels.join(", "))
}

fn save_failure_message(error: &SaveProfileError) -> String {
    match error {
        SaveProfileError::MissingFields(fields) => missing_fields_message(fields),
        SaveProfileError::ConnectionFailed(_) => MSG_CONNECTION_FAILED.to_string(),
        SaveProfileError::Storage(_) => MSG_STORAGE_FAILED.to_string(),
    }
}

/// Connection settings panel. Saving runs the live verification round trip
/// before anything is written to disk.
#[component]
pub fn SettingsForm() -> Element {
    let mut state = use_context::<AppState>();

    // The form starts from what is persisted, not from session state.
    let mut profile_form = use_signal(|| {
        state
            .storage
            .read()
            .load()
            .unwrap_or_else(|error| {
                tracing::warn!("Failed to load the stored connection profile: {error}");
                None
            })
            .unwrap_or_default()
    });
    let mut save_phase = use_signal(OpPhase::default);
    let mut form_notice = use_signal(|| None::<String>);

    let on_save = move |_: MouseEvent| {
        if save_phase().is_pending() {
            return;
        }
        form_notice.set(None);

        let Some(client) = state.remote.read().clone() else {
            form_notice.set(Some(MSG_CLIENT_UNAVAILABLE.to_string()));
            return;
        };
        let storage = state.storage.read().clone();
        let candidate = profile_form();

        save_phase.set(transition_op_phase(save_phase(), OpEvent::Started));
        spawn(async move {
            match save_profile(&client, &storage, &candidate).await {
                Ok(saved) => {
                    profile_form.set(saved.clone());
                    state.active_profile.set(Some(saved));
                    form_notice.set(Some(MSG_SAVED.to_string()));
                    save_phase.set(transition_op_phase(save_phase(), OpEvent::Succeeded));
                }
                Err(error) => {
                    tracing::warn!("Connection profile save failed: {error}");
                    form_notice.set(Some(save_failure_message(&error)));
                    save_phase.set(transition_op_phase(save_phase(), OpEvent::Failed));
                }
            }
        });
    };

    let busy = save_phase().is_pending();
    let form = profile_form();
    let app_version = env!("CARGO_PKG_VERSION");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 14px; max-width: 560px;",

            p {
                style: "margin: 0; font-size: 13px; color: #4b5563;",
                "Informe as credenciais do banco de dados. Antes de salvar, a conexão é testada com uma gravação de verificação que é removida em seguida."
            }

            if let Some(notice) = form_notice() {
                p {
                    style: "margin: 0; font-size: 13px; color: #374151; background: #eef2f7; border-radius: 8px; padding: 10px 12px;",
                    "{notice}"
                }
            }

            SettingsField {
                label: "Chave de API",
                required: true,
                value: form.api_key.clone(),
                oninput: move |event: FormEvent| profile_form.write().api_key = event.value(),
            }
            SettingsField {
                label: "Domínio de autenticação",
                required: true,
                value: form.auth_domain.clone(),
                oninput: move |event: FormEvent| profile_form.write().auth_domain = event.value(),
            }
            SettingsField {
                label: "ID do projeto",
                required: true,
                value: form.project_id.clone(),
                oninput: move |event: FormEvent| profile_form.write().project_id = event.value(),
            }
            SettingsField {
                label: "Bucket de armazenamento",
                value: form.storage_bucket.clone(),
                oninput: move |event: FormEvent| profile_form.write().storage_bucket = event.value(),
            }
            SettingsField {
                label: "ID do remetente de mensagens",
                value: form.messaging_sender_id.clone(),
                oninput: move |event: FormEvent| {
                    profile_form.write().messaging_sender_id = event.value();
                },
            }
            SettingsField {
                label: "ID do aplicativo",
                value: form.app_id.clone(),
                oninput: move |event: FormEvent| profile_form.write().app_id = event.value(),
            }
            SettingsField {
                label: "Nome da coleção",
                required: true,
                placeholder: DEFAULT_COLLECTION,
                value: form.collection.clone(),
                oninput: move |event: FormEvent| profile_form.write().collection = event.value(),
            }

            UiButton {
                variant: ButtonVariant::Primary,
                block: true,
                disabled: busy,
                onclick: on_save,
                if busy { "Testando conexão..." } else { "Testar e salvar" }
            }

            p {
                style: "margin: 0; font-size: 11px; color: #9ca3af;",
                "Prontu v{app_version}"
            }
        }
    }
}

/// Labeled input row for one profile field.
#[component]
fn SettingsField(
    label: &'static str,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] placeholder: &'static str,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "font-size: 12px; font-weight: 600; color: #374151;",
                "{label}"
                if required {
                    span { style: "color: #dc2626;", " *" }
                }
            }
            UiInput {
                value: "{value}",
                placeholder,
                oninput: move |event: FormEvent| oninput.call(event),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prontu_core::remote::RemoteError;

    #[test]
    fn missing_fields_message_uses_field_labels() {
        let message = missing_fields_message(&[ProfileField::ProjectId, ProfileField::ApiKey]);
        assert_eq!(
            message,
            "Preencha os campos obrigatórios: ID do projeto, Chave de API."
        );
    }

    #[test]
    fn save_failure_message_keeps_credentials_out_of_the_notice() {
        let error = SaveProfileError::ConnectionFailed(RemoteError::Api {
            status: 401,
            message: "API key not valid".to_string(),
        });
        let message = save_failure_message(&error);
        assert_eq!(message, MSG_CONNECTION_FAILED);
        assert!(!message.contains("401"));
    }

    #[test]
    fn save_failure_message_distinguishes_local_storage_problems() {
        let error = SaveProfileError::Storage(prontu_core::Error::Storage("disk".to_string()));
        assert_eq!(save_failure_message(&error), MSG_STORAGE_FAILED);
    }
}
