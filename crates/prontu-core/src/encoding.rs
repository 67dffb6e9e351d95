//! Attachment encoding.
//!
//! A captured file travels inside the record as a self-describing data URI
//! (`data:<media type>;base64,<payload>`), so one document carries both
//! attachments without a separate object store. Decoding reverses the
//! encoding exactly.

use base64::prelude::{Engine as _, BASE64_STANDARD};
use thiserror::Error;

use crate::error::{Error, Result};

const DATA_URI_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Errors produced while turning a selected file into an attachment value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The declared media type is not image-like.
    #[error("Unsupported media type for attachment: {mime_type}")]
    UnsupportedMediaType { mime_type: String },
}

/// Whether a declared media type is accepted for attachments.
#[must_use]
pub fn is_image_mime_type(mime_type: &str) -> bool {
    mime_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// Encode file content as a self-describing data URI.
///
/// Rejects any media type that is not image-like; this is the only gate the
/// attachment fields apply, and it runs at selection time.
///
/// # Examples
///
/// ```
/// use prontu_core::encoding::encode_attachment;
///
/// let uri = encode_attachment("image/png", b"raw pixels").unwrap();
/// assert!(uri.starts_with("data:image/png;base64,"));
/// ```
pub fn encode_attachment(
    mime_type: &str,
    bytes: &[u8],
) -> std::result::Result<String, EncodeError> {
    let mime_type = mime_type.trim();
    if !is_image_mime_type(mime_type) {
        return Err(EncodeError::UnsupportedMediaType {
            mime_type: mime_type.to_string(),
        });
    }

    let payload = BASE64_STANDARD.encode(bytes);
    Ok(format!("{DATA_URI_SCHEME}{mime_type}{BASE64_MARKER}{payload}"))
}

/// Decode a data URI back into its media type and original bytes.
pub fn decode_data_uri(value: &str) -> Result<(String, Vec<u8>)> {
    let rest = value
        .strip_prefix(DATA_URI_SCHEME)
        .ok_or_else(|| Error::InvalidInput("Attachment value is not a data URI".to_string()))?;
    let (mime_type, payload) = rest.split_once(BASE64_MARKER).ok_or_else(|| {
        Error::InvalidInput("Attachment value is missing the base64 marker".to_string())
    })?;
    if mime_type.is_empty() {
        return Err(Error::InvalidInput(
            "Attachment value has an empty media type".to_string(),
        ));
    }

    let bytes = BASE64_STANDARD.decode(payload).map_err(|error| {
        Error::InvalidInput(format!("Attachment payload is not base64: {error}"))
    })?;
    Ok((mime_type.to_string(), bytes))
}

/// Media type embedded in an encoded attachment, if the value is one.
#[must_use]
pub fn data_uri_media_type(value: &str) -> Option<&str> {
    let rest = value.strip_prefix(DATA_URI_SCHEME)?;
    let (mime_type, _) = rest.split_once(BASE64_MARKER)?;
    if mime_type.is_empty() {
        None
    } else {
        Some(mime_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_gate_accepts_only_image_prefix() {
        assert!(is_image_mime_type("image/png"));
        assert!(is_image_mime_type(" IMAGE/JPEG "));
        assert!(!is_image_mime_type("application/pdf"));
        assert!(!is_image_mime_type("text/plain"));
        assert!(!is_image_mime_type(""));
    }

    #[test]
    fn encode_rejects_non_image_media_types() {
        let error = encode_attachment("application/pdf", b"%PDF").unwrap_err();
        assert_eq!(
            error,
            EncodeError::UnsupportedMediaType {
                mime_type: "application/pdf".to_string()
            }
        );
    }

    #[test]
    fn encode_then_decode_reproduces_original_bytes() {
        let bytes: Vec<u8> = (0_u8..=255).collect();
        let encoded = encode_attachment("image/png", &bytes).unwrap();
        assert!(encoded.starts_with("data:image/png;base64,"));

        let (mime_type, decoded) = decode_data_uri(&encoded).unwrap();
        assert_eq!(mime_type, "image/png");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn encode_handles_empty_files() {
        let encoded = encode_attachment("image/gif", b"").unwrap();
        let (mime_type, decoded) = decode_data_uri(&encoded).unwrap();
        assert_eq!(mime_type, "image/gif");
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_rejects_malformed_values() {
        assert!(decode_data_uri("").is_err());
        assert!(decode_data_uri("image/png;base64,AAAA").is_err());
        assert!(decode_data_uri("data:;base64,AAAA").is_err());
        assert!(decode_data_uri("data:image/png;base64,not-base64!").is_err());
    }

    #[test]
    fn media_type_helper_reads_prefix_only() {
        assert_eq!(
            data_uri_media_type("data:image/jpeg;base64,AAAA"),
            Some("image/jpeg")
        );
        assert_eq!(data_uri_media_type("plain text"), None);
        assert_eq!(data_uri_media_type("data:;base64,AAAA"), None);
    }
}
