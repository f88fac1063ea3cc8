use serde::{Deserialize, Serialize};

use crate::Result;

/// Android action string for a "share with" intent.
pub const ACTION_SEND: &str = "android.intent.action.SEND";

/// Share intent as delivered by the native layer.
///
/// Which payload field is meaningful depends on the MIME type: binary and
/// image shares reference a content URI, text shares carry the text itself.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareIntent {
    pub action: String,
    pub mime_type: String,
    /// `EXTRA_STREAM` for binary payloads
    pub payload_uri: Option<String>,
    /// `EXTRA_TEXT` for text payloads
    pub payload_text: Option<String>,
}

impl ShareIntent {
    /// A share intent for a file or image behind a content URI.
    pub fn stream(mime_type: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            action: ACTION_SEND.to_string(),
            mime_type: mime_type.into(),
            payload_uri: Some(uri.into()),
            payload_text: None,
        }
    }

    /// A share intent for plain text.
    pub fn text(mime_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            action: ACTION_SEND.to_string(),
            mime_type: mime_type.into(),
            payload_uri: None,
            payload_text: Some(text.into()),
        }
    }

    pub fn is_send(&self) -> bool {
        self.action == ACTION_SEND
    }
}

/// How a shared payload is read, decided by its MIME type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Images and `application/*` documents behind a content URI.
    Binary,
    /// Text carried inline in the intent.
    Text,
}

/// The display-name and size columns of a content provider row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    pub display_name: Option<String>,
    pub size: Option<i64>,
}

/// Normalized description of shared content, as handed to the webview.
///
/// Serializes to exactly `{mimeType, uri, fileName, fileSize}`. For text shares
/// `uri` holds the text and the file fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDescriptor {
    pub mime_type: String,
    pub uri: String,
    pub file_name: String,
    pub file_size: String,
}

impl ContentDescriptor {
    pub fn file(mime_type: &str, uri: &str, file_name: String, file_size: i64) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            uri: uri.to_string(),
            file_name,
            file_size: file_size.to_string(),
        }
    }

    pub fn text(mime_type: &str, text: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            uri: text.to_string(),
            file_name: String::new(),
            file_size: String::new(),
        }
    }

    /// Encode the descriptor as the JSON envelope string sent to the webview.
    pub fn to_envelope(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Launch-time properties read by the frontend at first render.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchProps {
    /// JSON envelope of the content that cold-started the app, if any
    pub shared_content: Option<String>,
}

/// Payload of the `content-share-failed` event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareFailedPayload<'a> {
    pub mime_type: &'a str,
    pub error: &'a crate::Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_field_names() {
        let descriptor =
            ContentDescriptor::file("image/png", "content://media/7", "photo.png".into(), 1024);
        let value: serde_json::Value =
            serde_json::from_str(&descriptor.to_envelope().unwrap()).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["mimeType"], "image/png");
        assert_eq!(object["uri"], "content://media/7");
        assert_eq!(object["fileName"], "photo.png");
        assert_eq!(object["fileSize"], "1024");
    }

    #[test]
    fn test_share_intent_from_native_json() {
        let intent: ShareIntent = serde_json::from_str(
            r#"{"action":"android.intent.action.SEND","mimeType":"text/plain","payloadText":"hi"}"#,
        )
        .unwrap();
        assert!(intent.is_send());
        assert_eq!(intent.payload_text.as_deref(), Some("hi"));
        assert!(intent.payload_uri.is_none());
    }

    #[test]
    fn test_launch_props_empty_by_default() {
        let json = serde_json::to_string(&LaunchProps::default()).unwrap();
        assert_eq!(json, r#"{"sharedContent":null}"#);
    }
}
