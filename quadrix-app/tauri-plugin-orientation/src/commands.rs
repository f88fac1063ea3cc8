use tauri::{command, AppHandle, Runtime};

use crate::models::*;
use crate::Result;
use crate::ScreenOrientationExt;

/// Start tracking orientation. Changes arrive as `orientation-changed` events
/// until `stop` is called with the returned handle.
#[command]
pub(crate) async fn start<R: Runtime>(app: AppHandle<R>) -> Result<TrackingHandle> {
    app.screen_orientation().start()
}

#[command]
pub(crate) async fn stop<R: Runtime>(app: AppHandle<R>, handle: TrackingHandle) -> Result<()> {
    app.screen_orientation().stop(handle)
}

/// Hide system bars on the foreground window.
#[command]
pub(crate) async fn fullscreen_on<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.screen_orientation().set_chrome(WindowChrome::Immersive)
}

#[command]
pub(crate) async fn fullscreen_off<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.screen_orientation().set_chrome(WindowChrome::Visible)
}
