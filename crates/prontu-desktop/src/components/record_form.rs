use chrono::Utc;
use dioxus::prelude::*;

use prontu_core::models::{RecordDraft, RecordField};
use prontu_core::ops::{transition_op_phase, OpEvent, OpPhase};
use prontu_core::records::{submit_record, SubmitError, SubmitReceipt};

use super::attachment_field::AttachmentField;
use crate::state::{AppState, AppTab};
use crate::ui::{ButtonVariant, UiButton, UiTextarea};

const MSG_PROFILE_REQUIRED: &str = "Configure a conexão antes de enviar um registro.";
const MSG_CLIENT_UNAVAILABLE: &str = "O cliente de conexão não está disponível.";
const MSG_SUBMIT_FAILED: &str =
    "Não foi possível enviar o registro. Verifique a conexão e tente novamente.";

fn missing_fields_message(fields: &[RecordField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    format!("Preencha os campos obrigatórios: {}.", labels.join(", "))
}

fn submit_success_message(receipt: &SubmitReceipt) -> String {
    format!(
        "Registro enviado com sucesso (documento {}).",
        receipt.document_id
    )
}

fn submit_failure_message(error: &SubmitError) -> String {
    match error {
        SubmitError::ProfileRequired => MSG_PROFILE_REQUIRED.to_string(),
        SubmitError::MissingFields(fields) => missing_fields_message(fields),
        SubmitError::Remote(_) | SubmitError::Storage(_) => MSG_SUBMIT_FAILED.to_string(),
    }
}

/// Capture form for one medical record: two image attachments plus a free-form
/// description, submitted as a single document.
#[component]
pub fn RecordForm() -> Element {
    let mut state = use_context::<AppState>();

    let mut exam_image = use_signal(String::new);
    let mut exam_report = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut submit_phase = use_signal(OpPhase::default);
    let mut form_notice = use_signal(|| None::<String>);

    let on_submit = move |_: MouseEvent| {
        if submit_phase().is_pending() {
            return;
        }
        form_notice.set(None);

        // A record cannot go anywhere without a saved connection profile.
        if (state.active_profile)().is_none() {
            form_notice.set(Some(MSG_PROFILE_REQUIRED.to_string()));
            state.active_tab.set(AppTab::Settings);
            return;
        }
        let Some(client) = state.remote.read().clone() else {
            form_notice.set(Some(MSG_CLIENT_UNAVAILABLE.to_string()));
            return;
        };

        let draft = RecordDraft {
            exam_image: exam_image(),
            exam_report: exam_report(),
            description: description(),
        };
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            form_notice.set(Some(missing_fields_message(&missing)));
            return;
        }

        let storage = state.storage.read().clone();
        submit_phase.set(transition_op_phase(submit_phase(), OpEvent::Started));

        spawn(async move {
            match submit_record(&client, &storage, &draft, Utc::now()).await {
                Ok(receipt) => {
                    exam_image.set(String::new());
                    exam_report.set(String::new());
                    description.set(String::new());
                    form_notice.set(Some(submit_success_message(&receipt)));
                    submit_phase.set(transition_op_phase(submit_phase(), OpEvent::Succeeded));
                }
                Err(error) => {
                    tracing::warn!("Record submission failed: {error}");
                    if matches!(error, SubmitError::ProfileRequired) {
                        state.active_tab.set(AppTab::Settings);
                    }
                    form_notice.set(Some(submit_failure_message(&error)));
                    submit_phase.set(transition_op_phase(submit_phase(), OpEvent::Failed));
                }
            }
        });
    };

    let busy = submit_phase().is_pending();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px; max-width: 680px;",

            if let Some(notice) = form_notice() {
                p {
                    style: "margin: 0; font-size: 13px; color: #374151; background: #eef2f7; border-radius: 8px; padding: 10px 12px;",
                    "{notice}"
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                AttachmentField {
                    label: "Imagem do exame",
                    value: exam_image(),
                    on_change: move |data_uri: String| exam_image.set(data_uri),
                }
                AttachmentField {
                    label: "Laudo do exame",
                    value: exam_report(),
                    on_change: move |data_uri: String| exam_report.set(data_uri),
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                span {
                    style: "font-size: 13px; font-weight: 600; color: #374151;",
                    "Descrição"
                }
                UiTextarea {
                    rows: "5",
                    placeholder: "Descreva o exame e as observações clínicas",
                    value: "{description}",
                    oninput: move |event: FormEvent| description.set(event.value()),
                }
            }

            UiButton {
                variant: ButtonVariant::Primary,
                block: true,
                disabled: busy,
                onclick: on_submit,
                if busy { "Enviando..." } else { "Salvar registro" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prontu_core::remote::RemoteError;

    #[test]
    fn missing_fields_message_lists_labels_in_order() {
        let message = missing_fields_message(&[RecordField::ExamImage, RecordField::Description]);
        assert_eq!(
            message,
            "Preencha os campos obrigatórios: Imagem do exame, Descrição."
        );
    }

    #[test]
    fn submit_failure_message_keeps_transient_errors_generic() {
        let remote = SubmitError::Remote(RemoteError::Api {
            status: 503,
            message: "unavailable".to_string(),
        });
        let storage = SubmitError::Storage(prontu_core::Error::Storage("disk".to_string()));

        assert_eq!(submit_failure_message(&remote), MSG_SUBMIT_FAILED);
        assert_eq!(submit_failure_message(&storage), MSG_SUBMIT_FAILED);
        assert!(!submit_failure_message(&remote).contains("503"));
    }

    #[test]
    fn submit_failure_message_points_missing_profile_at_settings() {
        let message = submit_failure_message(&SubmitError::ProfileRequired);
        assert!(message.contains("Configure a conexão"));
    }

    #[test]
    fn submit_success_message_carries_the_document_id() {
        let receipt = SubmitReceipt {
            document_id: "rec-42".to_string(),
        };
        assert!(submit_success_message(&receipt).contains("rec-42"));
    }
}
