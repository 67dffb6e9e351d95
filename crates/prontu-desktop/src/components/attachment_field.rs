use dioxus::html::HasFileData;
use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use prontu_core::encoding::{data_uri_media_type, encode_attachment, is_image_mime_type};
use prontu_core::ops::{transition_op_phase, OpEvent, OpPhase};
use prontu_core::util::normalize_text_option;

use crate::ui::{ButtonVariant, UiButton};

const MSG_ONLY_IMAGES: &str = "Apenas arquivos de imagem são aceitos.";
const MSG_READ_FAILED: &str = "Não foi possível ler o arquivo selecionado.";

/// Media type used by the image gate: the reported content type when present,
/// otherwise a guess from the file extension.
fn resolved_media_type(content_type: Option<String>, file_name: &str) -> Option<String> {
    normalize_text_option(content_type).or_else(|| {
        mime_guess::from_path(file_name)
            .first_raw()
            .map(str::to_string)
    })
}

/// One attachment slot: accepts a dropped or browsed image, encodes it and
/// hands the resulting data URI to the owner via `on_change`.
#[component]
pub(super) fn AttachmentField(
    label: &'static str,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut encode_phase = use_signal(OpPhase::default);
    let mut field_error = use_signal(|| None::<String>);
    let mut drag_over = use_signal(|| false);

    let on_drag_over = move |evt: Event<DragData>| {
        evt.prevent_default();
        drag_over.set(true);
    };

    let on_drag_leave = move |_: Event<DragData>| {
        drag_over.set(false);
    };

    let on_drop = move |evt: Event<DragData>| {
        evt.prevent_default();
        drag_over.set(false);
        field_error.set(None);

        if encode_phase().is_pending() {
            return;
        }

        // Only the first dropped file is considered.
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        let Some(media_type) = resolved_media_type(file.content_type(), &file_name)
            .filter(|media_type| is_image_mime_type(media_type))
        else {
            field_error.set(Some(MSG_ONLY_IMAGES.to_string()));
            return;
        };

        encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Started));
        spawn(async move {
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(error) => {
                    tracing::warn!("Failed to read dropped file {file_name}: {error}");
                    field_error.set(Some(MSG_READ_FAILED.to_string()));
                    encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Failed));
                    return;
                }
            };

            match encode_attachment(&media_type, &bytes) {
                Ok(data_uri) => {
                    on_change.call(data_uri);
                    encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Succeeded));
                }
                Err(error) => {
                    tracing::warn!("Failed to encode dropped file {file_name}: {error}");
                    field_error.set(Some(MSG_ONLY_IMAGES.to_string()));
                    encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Failed));
                }
            }
        });
    };

    let on_pick = move |_: MouseEvent| {
        field_error.set(None);
        if encode_phase().is_pending() {
            return;
        }

        encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Started));
        spawn(async move {
            let Some(file) = AsyncFileDialog::new().pick_file().await else {
                encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Reset));
                return;
            };

            let file_name = file.file_name();
            let Some(media_type) = resolved_media_type(None, &file_name)
                .filter(|media_type| is_image_mime_type(media_type))
            else {
                field_error.set(Some(MSG_ONLY_IMAGES.to_string()));
                encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Failed));
                return;
            };

            let bytes = file.read().await;
            match encode_attachment(&media_type, &bytes) {
                Ok(data_uri) => {
                    on_change.call(data_uri);
                    encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Succeeded));
                }
                Err(error) => {
                    tracing::warn!("Failed to encode selected file {file_name}: {error}");
                    field_error.set(Some(MSG_ONLY_IMAGES.to_string()));
                    encode_phase.set(transition_op_phase(encode_phase(), OpEvent::Failed));
                }
            }
        });
    };

    let on_clear = move |_: MouseEvent| {
        field_error.set(None);
        on_change.call(String::new());
    };

    let busy = encode_phase().is_pending();
    let has_value = !value.is_empty();
    let media_chip = data_uri_media_type(&value).unwrap_or("imagem").to_string();
    let border_color = if drag_over() { "#0f766e" } else { "#d1d5db" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 13px; font-weight: 600; color: #374151;",
                "{label}"
            }

            div {
                style: "
                    border: 1px dashed {border_color};
                    border-radius: 8px;
                    padding: 14px;
                    background: #ffffff;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                ",
                ondragover: on_drag_over,
                ondragleave: on_drag_leave,
                ondrop: on_drop,

                if busy {
                    p {
                        style: "margin: 0; font-size: 12px; color: #6b7280;",
                        "Carregando imagem..."
                    }
                } else if has_value {
                    img {
                        src: "{value}",
                        style: "max-height: 140px; max-width: 100%; object-fit: contain; border-radius: 6px; align-self: flex-start;",
                    }
                    span {
                        style: "font-size: 11px; color: #6b7280;",
                        "{media_chip}"
                    }
                } else {
                    p {
                        style: "margin: 0; font-size: 12px; color: #6b7280;",
                        "Arraste uma imagem aqui ou use o botão abaixo."
                    }
                }

                div {
                    style: "display: flex; gap: 8px;",
                    UiButton {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: on_pick,
                        if has_value { "Substituir" } else { "Escolher arquivo" }
                    }
                    if has_value {
                        UiButton {
                            variant: ButtonVariant::Ghost,
                            onclick: on_clear,
                            "Remover"
                        }
                    }
                }
            }

            if let Some(error) = field_error() {
                p {
                    style: "margin: 0; font-size: 12px; color: #dc2626;",
                    "{error}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_media_type_prefers_reported_content_type() {
        let media_type = resolved_media_type(Some("image/webp".to_string()), "exame.png");
        assert_eq!(media_type.as_deref(), Some("image/webp"));
    }

    #[test]
    fn resolved_media_type_falls_back_to_extension() {
        assert_eq!(
            resolved_media_type(None, "exame.png").as_deref(),
            Some("image/png")
        );
        assert_eq!(
            resolved_media_type(Some("   ".to_string()), "laudo.jpg").as_deref(),
            Some("image/jpeg")
        );
    }

    #[test]
    fn resolved_media_type_is_none_without_extension() {
        assert_eq!(resolved_media_type(None, "laudo"), None);
    }
}
