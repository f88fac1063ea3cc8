use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use config::Config;
pub use debouncer::OrientationDebouncer;
pub use events::ORIENTATION_CHANGED;
pub use models::*;
pub use tracker::{OrientationTracker, SampleSender, TrackerRegistry};

#[cfg(not(target_os = "android"))]
mod desktop;
#[cfg(target_os = "android")]
mod mobile;

mod commands;
mod config;
mod debouncer;
mod error;
mod events;
mod models;
mod tracker;

pub use error::{Error, Result};

#[cfg(not(target_os = "android"))]
use desktop::ScreenOrientation;
#[cfg(target_os = "android")]
use mobile::ScreenOrientation;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the orientation APIs.
pub trait ScreenOrientationExt<R: Runtime> {
    fn screen_orientation(&self) -> &ScreenOrientation<R>;
}

impl<R: Runtime, T: Manager<R>> crate::ScreenOrientationExt<R> for T {
    fn screen_orientation(&self) -> &ScreenOrientation<R> {
        self.state::<ScreenOrientation<R>>().inner()
    }
}

/// Initializes the orientation plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("orientation")
        .invoke_handler(tauri::generate_handler![
            commands::start,
            commands::stop,
            commands::fullscreen_on,
            commands::fullscreen_off,
        ])
        .setup(|app, api| {
            #[cfg(target_os = "android")]
            let orientation = mobile::init(app, api)?;
            #[cfg(not(target_os = "android"))]
            let orientation = desktop::init(app, api)?;
            app.manage(orientation);
            Ok(())
        })
        .build()
}
