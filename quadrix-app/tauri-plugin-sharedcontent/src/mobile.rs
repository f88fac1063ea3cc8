//! Android implementation bridging to the native share handling.
//!
//! The Android side owns the activity: it hands over the intent that launched
//! the app, forwards every `onNewIntent` through a channel, and answers
//! content resolver queries for stream payloads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::{
    ipc::{Channel, InvokeResponseBody},
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};
use tracing::{debug, error};

use crate::config::Config;
use crate::inbox::{Delivery, ShareInbox};
use crate::models::*;
use crate::resolver::MetadataSource;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LaunchIntentResponse {
    intent: Option<ShareIntent>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryMetadataArgs<'a> {
    uri: &'a str,
}

#[derive(Serialize)]
struct SetIntentHandlerArgs {
    handler: Channel,
}

/// Initialize the mobile plugin by registering native code.
pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
) -> crate::Result<SharedContent<R>> {
    let config = api.config().clone().unwrap_or_default();

    let handle =
        api.register_android_plugin("chat.quadrix.plugins.sharedcontent", "SharedContentPlugin")?;

    // The launch intent arrives before the webview exists, so it can only
    // become a launch property.
    let launch: LaunchIntentResponse = handle.run_mobile_plugin("getLaunchIntent", ())?;

    let shared = SharedContent(Arc::new(Inner {
        app: app.clone(),
        source: ContentResolver(handle.clone()),
        inbox: ShareInbox::new(config),
    }));

    if let Some(intent) = launch.intent {
        if let Err(e) = shared.handle_intent(&intent) {
            error!("Failed to handle launch intent: {}", e);
        }
    }

    let listener = shared.clone();
    let handler = Channel::new(move |body| {
        if let InvokeResponseBody::Json(json) = body {
            match serde_json::from_str::<ShareIntent>(&json) {
                Ok(intent) => {
                    // `deliver` logs and reports the error.
                    let _ = listener.handle_intent(&intent);
                }
                Err(e) => error!("Malformed share intent from native layer: {}", e),
            }
        }
        Ok(())
    });
    handle.run_mobile_plugin::<serde_json::Value>(
        "setIntentHandler",
        SetIntentHandlerArgs { handler },
    )?;
    debug!("Share intent handler registered");

    Ok(shared)
}

struct Inner<R: Runtime> {
    app: AppHandle<R>,
    source: ContentResolver<R>,
    inbox: ShareInbox,
}

/// Access to the sharedcontent mobile APIs.
pub struct SharedContent<R: Runtime>(Arc<Inner<R>>);

impl<R: Runtime> Clone for SharedContent<R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<R: Runtime> SharedContent<R> {
    /// Deliver a share intent to the webview.
    pub fn handle_intent(&self, intent: &ShareIntent) -> crate::Result<Delivery> {
        crate::events::deliver(&self.0.app, &self.0.inbox, &self.0.source, intent)
    }

    /// Read and clear the launch properties; subsequent shares become events.
    pub fn take_launch_props(&self) -> LaunchProps {
        self.0.inbox.take_launch_props()
    }
}

/// Content resolver queries answered by the native plugin.
struct ContentResolver<R: Runtime>(PluginHandle<R>);

impl<R: Runtime> MetadataSource for ContentResolver<R> {
    fn query(&self, uri: &str) -> crate::Result<Option<ContentMetadata>> {
        self.0
            .run_mobile_plugin("queryMetadata", QueryMetadataArgs { uri })
            .map_err(Into::into)
    }
}
