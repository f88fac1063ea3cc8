use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use config::Config;
pub use events::{CONTENT_SHARED, CONTENT_SHARE_FAILED};
pub use inbox::{Delivery, LaunchPhase, ShareInbox};
pub use models::*;
pub use resolver::{resolve, MetadataSource};

#[cfg(not(target_os = "android"))]
mod desktop;
#[cfg(target_os = "android")]
mod mobile;

mod commands;
mod config;
mod error;
mod events;
mod inbox;
mod models;
mod resolver;

pub use error::{Error, Result};

#[cfg(not(target_os = "android"))]
use desktop::SharedContent;
#[cfg(target_os = "android")]
use mobile::SharedContent;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the sharedcontent APIs.
pub trait SharedContentExt<R: Runtime> {
    fn shared_content(&self) -> &SharedContent<R>;
}

impl<R: Runtime, T: Manager<R>> crate::SharedContentExt<R> for T {
    fn shared_content(&self) -> &SharedContent<R> {
        self.state::<SharedContent<R>>().inner()
    }
}

/// Initializes the sharedcontent plugin.
///
/// This plugin makes the app a target of the Android share sheet:
/// - Content that cold-starts the app is exposed through `get_launch_props`
/// - Content shared while the app runs is emitted as `content-shared`
/// - Supported shares that cannot be resolved are emitted as `content-share-failed`
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("sharedcontent")
        .invoke_handler(tauri::generate_handler![commands::get_launch_props])
        .setup(|app, api| {
            #[cfg(target_os = "android")]
            let shared_content = mobile::init(app, api)?;
            #[cfg(not(target_os = "android"))]
            let shared_content = desktop::init(app, api)?;
            app.manage(shared_content);
            Ok(())
        })
        .build()
}
