//! # Annotation Service Shapes
//!
//! The engine does not perform network calls. This module holds what a
//! caller needs to talk to the annotation service: the session id sent with
//! an upload, the form field names and paths, and decoding of the service's
//! replies. The CSV the service returns goes through [`crate::parse_labels`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SwaraError;

/// Form field carrying the audio payload.
pub const AUDIO_FIELD: &str = "audio";
/// Form field carrying the session id.
pub const AUDIO_UID_FIELD: &str = "audio_uid";
pub const UPLOAD_PATH: &str = "/upload";

/// Opaque id tying an uploaded clip to the labels generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an id produced elsewhere, e.g. `crypto.randomUUID()` in a browser.
    pub fn new(id: impl Into<String>) -> Result<Self, SwaraError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SwaraError::TransportError(format!(
                "session id {:?} must be non-empty and URL-safe",
                id
            )));
        }
        Ok(Self(id))
    }

    /// Random version 4 UUID in canonical hyphenated form.
    #[cfg(feature = "session-ids")]
    pub fn generate() -> Self {
        let mut bytes: [u8; 16] = rand::random();
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path that serves the label CSV generated for `id`.
pub fn download_path(id: &SessionId) -> String {
    format!("/download_csv/{}", id)
}

/// Successful upload acknowledgement.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadReceipt {
    pub message: String,
    pub audio_uid: SessionId,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode the service's reply to an upload.
///
/// # Errors
/// [`SwaraError::TransportError`] for a non-2xx status or an unreadable body.
///
/// # Example
/// ```
/// use swara::transport::parse_upload_response;
///
/// let receipt = parse_upload_response(200, r#"{"message": "Audio processed.", "audio_uid": "abc-123"}"#)?;
/// assert_eq!(receipt.audio_uid.as_str(), "abc-123");
///
/// let err = parse_upload_response(400, r#"{"error": "No audio file provided in the request."}"#).unwrap_err();
/// assert!(err.to_string().contains("No audio file"));
/// # Ok::<(), swara::SwaraError>(())
/// ```
pub fn parse_upload_response(status: u16, body: &str) -> Result<UploadReceipt, SwaraError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| format!("HTTP error! status: {}", status));
        return Err(SwaraError::TransportError(detail));
    }
    serde_json::from_str(body)
        .map_err(|e| SwaraError::TransportError(format!("unexpected upload response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_path() {
        let id = SessionId::new("3f2a-99").unwrap();
        assert_eq!(download_path(&id), "/download_csv/3f2a-99");
    }

    #[test]
    fn test_session_id_rejects_unsafe_text() {
        assert!(SessionId::new("").is_err());
        assert!(SessionId::new("../etc").is_err());
        assert!(SessionId::new("a b").is_err());
    }

    #[cfg(feature = "session-ids")]
    #[test]
    fn test_generated_ids_are_uuid_v4() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);

        let s = a.as_str();
        assert_eq!(s.len(), 36);
        let groups: Vec<&str> = s.split('-').collect();
        assert_eq!(groups.iter().map(|g| g.len()).collect::<Vec<_>>(), vec![8, 4, 4, 4, 12]);
        assert!(groups[2].starts_with('4'));
        assert!(matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
        assert!(SessionId::new(s).is_ok());
    }

    #[test]
    fn test_error_status_without_json_body() {
        let err = parse_upload_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, SwaraError::TransportError("HTTP error! status: 502".to_string()));
    }

    #[test]
    fn test_ok_status_with_garbage_body() {
        assert!(matches!(
            parse_upload_response(200, "not json"),
            Err(SwaraError::TransportError(_))
        ));
    }
}
