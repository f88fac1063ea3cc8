use tauri::{AppHandle, Emitter, Runtime};
use tracing::{debug, info, warn};

use crate::inbox::{Delivery, LaunchPhase, ShareInbox};
use crate::models::{ShareFailedPayload, ShareIntent};
use crate::resolver::MetadataSource;
use crate::Result;

/// Emitted with the JSON envelope when content is shared to a running app.
pub const CONTENT_SHARED: &str = "content-shared";

/// Emitted when a share of a supported type references unusable content.
pub const CONTENT_SHARE_FAILED: &str = "content-share-failed";

/// Accept an intent and emit the resulting event.
///
/// Emission is best effort: if the webview is not listening the share is lost.
/// Unsupported MIME types never produce an event.
pub(crate) fn deliver<R: Runtime>(
    app: &AppHandle<R>,
    inbox: &ShareInbox,
    source: &dyn MetadataSource,
    intent: &ShareIntent,
) -> Result<Delivery> {
    let result = inbox.accept(intent, source);

    match &result {
        Ok(Delivery::Emit(envelope)) => {
            info!("Forwarding shared {} content to webview", intent.mime_type);
            if let Err(e) = app.emit(CONTENT_SHARED, envelope) {
                warn!("Failed to emit {}: {}", CONTENT_SHARED, e);
            }
        }
        Ok(_) => {}
        Err(error) if !error.notifies_frontend() => {
            debug!("Ignoring share: {}", error);
        }
        Err(error) => {
            warn!("Dropping shared {} content: {}", intent.mime_type, error);
            if inbox.phase() == LaunchPhase::Running {
                let payload = ShareFailedPayload {
                    mime_type: &intent.mime_type,
                    error,
                };
                if let Err(e) = app.emit(CONTENT_SHARE_FAILED, payload) {
                    warn!("Failed to emit {}: {}", CONTENT_SHARE_FAILED, e);
                }
            }
        }
    }

    result
}
