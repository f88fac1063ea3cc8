use serde::Deserialize;

use crate::models::PayloadKind;

/// Plugin configuration, read from `plugins.sharedcontent` in `tauri.conf.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// MIME prefixes resolved through the content provider.
    pub binary_mime_prefixes: Vec<String>,
    /// MIME prefixes whose payload is the intent's text extra.
    pub text_mime_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary_mime_prefixes: vec!["image/".to_string(), "application/".to_string()],
            text_mime_prefixes: vec!["text/".to_string()],
        }
    }
}

impl Config {
    /// Classify a MIME type by prefix. `None` means the share is not handled.
    pub fn classify(&self, mime_type: &str) -> Option<PayloadKind> {
        if has_prefix(&self.binary_mime_prefixes, mime_type) {
            Some(PayloadKind::Binary)
        } else if has_prefix(&self.text_mime_prefixes, mime_type) {
            Some(PayloadKind::Text)
        } else {
            None
        }
    }
}

fn has_prefix(prefixes: &[String], mime_type: &str) -> bool {
    prefixes.iter().any(|prefix| mime_type.starts_with(prefix.as_str()))
}
