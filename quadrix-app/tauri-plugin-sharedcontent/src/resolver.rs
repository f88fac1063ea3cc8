//! Turns a share intent into a [`ContentDescriptor`].

use crate::config::Config;
use crate::models::{ContentDescriptor, ContentMetadata, PayloadKind, ShareIntent};
use crate::{Error, Result};

/// Content provider lookup for binary payloads.
///
/// Returns `Ok(None)` when the provider has no row for the URI.
pub trait MetadataSource: Send + Sync {
    fn query(&self, uri: &str) -> Result<Option<ContentMetadata>>;
}

/// Build the descriptor for a share intent.
///
/// Binary payloads take their file name and size from `source`; text payloads
/// use the shared text as `uri` and leave the file fields empty.
pub fn resolve(
    intent: &ShareIntent,
    source: &dyn MetadataSource,
    config: &Config,
) -> Result<ContentDescriptor> {
    let mime_type = intent.mime_type.as_str();

    match config.classify(mime_type) {
        Some(PayloadKind::Binary) => {
            let uri = intent
                .payload_uri
                .as_deref()
                .filter(|uri| !uri.is_empty())
                .ok_or(Error::MissingPayload("stream"))?;

            let metadata = source.query(uri)?.ok_or_else(|| unavailable(uri, "no rows"))?;
            let file_name = metadata
                .display_name
                .ok_or_else(|| unavailable(uri, "missing display name"))?;
            let file_size = metadata.size.ok_or_else(|| unavailable(uri, "missing size"))?;

            Ok(ContentDescriptor::file(mime_type, uri, file_name, file_size))
        }
        Some(PayloadKind::Text) => {
            let text = intent
                .payload_text
                .as_deref()
                .filter(|text| !text.is_empty())
                .ok_or(Error::MissingPayload("text"))?;

            Ok(ContentDescriptor::text(mime_type, text))
        }
        None => Err(Error::UnsupportedMimeType(intent.mime_type.clone())),
    }
}

fn unavailable(uri: &str, reason: &str) -> Error {
    Error::MetadataUnavailable {
        uri: uri.to_string(),
        reason: reason.to_string(),
    }
}
