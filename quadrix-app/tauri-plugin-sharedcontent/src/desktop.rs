use std::path::PathBuf;

use tauri::{plugin::PluginApi, AppHandle, Runtime, Url};

use crate::config::Config;
use crate::inbox::{Delivery, ShareInbox};
use crate::models::*;
use crate::resolver::MetadataSource;

/// Initialize the desktop plugin.
pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
) -> crate::Result<SharedContent<R>> {
    let config = api.config().clone().unwrap_or_default();
    Ok(SharedContent {
        app: app.clone(),
        inbox: ShareInbox::new(config),
    })
}

/// Access to the sharedcontent APIs on platforms without a native bridge.
///
/// There is no share sheet here, but intents handed in by the host (for example
/// from an "open with" argument) go through the same pipeline. Metadata comes
/// from the local file system, so only `file://` URIs and plain paths resolve.
pub struct SharedContent<R: Runtime> {
    app: AppHandle<R>,
    inbox: ShareInbox,
}

impl<R: Runtime> SharedContent<R> {
    /// Deliver a share intent to the webview.
    pub fn handle_intent(&self, intent: &ShareIntent) -> crate::Result<Delivery> {
        crate::events::deliver(&self.app, &self.inbox, &FileMetadata, intent)
    }

    /// Read and clear the launch properties; subsequent shares become events.
    pub fn take_launch_props(&self) -> LaunchProps {
        self.inbox.take_launch_props()
    }
}

/// Metadata for local files.
pub(crate) struct FileMetadata;

impl MetadataSource for FileMetadata {
    fn query(&self, uri: &str) -> crate::Result<Option<ContentMetadata>> {
        let path = match Url::parse(uri) {
            Ok(url) if url.scheme() == "file" => url.to_file_path().ok(),
            _ => Some(PathBuf::from(uri)).filter(|path| path.is_absolute()),
        };
        let Some(path) = path else {
            return Ok(None);
        };

        let metadata = match std::fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(ContentMetadata {
            display_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            size: i64::try_from(metadata.len()).ok(),
        }))
    }
}
