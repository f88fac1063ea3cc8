//! Error types for the orientation plugin.

use serde::ser::SerializeStruct;

use crate::models::TrackingHandle;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while tracking orientation or toggling fullscreen.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `stop` was called with a handle that no live tracker owns.
    #[error("Orientation tracking not started for handle {0}")]
    NotStarted(TrackingHandle),

    /// Window operation failed.
    #[error(transparent)]
    Tauri(#[from] tauri::Error),

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
            Error::NotStarted(_) => "NOT_STARTED",
            Error::Tauri(_) => "WINDOW_ERROR",
            #[cfg(target_os = "android")]
            Error::PluginInvoke(_) => "PLUGIN_INVOKE_ERROR",
        }
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
    fn test_not_started_serialization() {
        let err = Error::NotStarted(TrackingHandle(7));
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            r#"{"code":"NOT_STARTED","message":"Orientation tracking not started for handle 7"}"#
        );
    }
}
