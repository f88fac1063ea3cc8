//! Error types for the sharedcontent plugin.

use serde::ser::SerializeStruct;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a share intent into a content descriptor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The MIME type matches none of the configured binary or text prefixes.
    #[error("Unsupported MIME type: {0}")]
    UnsupportedMimeType(String),

    /// The intent carries no stream reference (binary) or no text (text).
    #[error("Share intent carries no {0} payload")]
    MissingPayload(&'static str),

    /// The content provider returned no row, or the row lacks name or size.
    #[error("Metadata unavailable for {uri}: {reason}")]
    MetadataUnavailable { uri: String, reason: String },

    /// The content descriptor could not be encoded as JSON.
    #[error("Failed to encode shared content: {0}")]
    EncodingFailed(#[from] serde_json::Error),

    /// I/O error while reading local file metadata.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mobile plugin invocation error.
    #[cfg(target_os = "android")]
    #[error("Plugin invoke error: {0}")]
    PluginInvoke(String),
}

#[cfg(target_os = "android")]
impl From<tauri::plugin::mobile::PluginInvokeError> for Error {
    fn from(err: tauri::plugin::mobile::PluginInvokeError) -> Self {
        Error::PluginInvoke(err.to_string())
    }
}

impl Error {
    /// Stable code for programmatic handling on the frontend.
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnsupportedMimeType(_) => "UNSUPPORTED_MIME_TYPE",
            Error::MissingPayload(_) => "MISSING_PAYLOAD",
            Error::MetadataUnavailable { .. } => "METADATA_UNAVAILABLE",
            Error::EncodingFailed(_) => "ENCODING_FAILED",
            Error::Io(_) => "IO_ERROR",
            #[cfg(target_os = "android")]
            Error::PluginInvoke(_) => "PLUGIN_INVOKE_ERROR",
        }
    }

    /// Whether a running frontend is told about this failure.
    ///
    /// Unsupported MIME types are silently dropped; every other failure means
    /// the content reference itself was unusable.
    pub fn notifies_frontend(&self) -> bool {
        !matches!(self, Error::UnsupportedMimeType(_))
    }
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = Error::UnsupportedMimeType("video/mp4".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("UNSUPPORTED_MIME_TYPE"));
        assert!(json.contains("video/mp4"));
    }

    #[test]
    fn test_metadata_unavailable_message() {
        let err = Error::MetadataUnavailable {
            uri: "content://media/42".into(),
            reason: "no rows".into(),
        };
        assert_eq!(
            err.to_string(),
            "Metadata unavailable for content://media/42: no rows"
        );
        assert_eq!(err.code(), "METADATA_UNAVAILABLE");
    }

    #[test]
    fn test_only_unusable_content_notifies_frontend() {
        assert!(!Error::UnsupportedMimeType("video/mp4".into()).notifies_frontend());
        assert!(Error::MissingPayload("stream").notifies_frontend());
        assert!(Error::MetadataUnavailable {
            uri: "content://media/1".into(),
            reason: "no rows".into(),
        }
        .notifies_frontend());
    }
}
