use tauri::{AppHandle, Emitter, Runtime};

use crate::models::DeviceOrientation;

/// Emitted with `"landscapeL"`, `"landscapeR"` or `"portrait"` on every change.
pub const ORIENTATION_CHANGED: &str = "orientation-changed";

/// Emission callback for a tracker.
pub(crate) fn orientation_emitter<R: Runtime>(
    app: AppHandle<R>,
) -> impl Fn(DeviceOrientation) -> tauri::Result<()> + Send + 'static {
    move |orientation| app.emit(ORIENTATION_CHANGED, orientation.as_str())
}
