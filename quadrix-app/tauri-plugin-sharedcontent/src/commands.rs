use tauri::{command, AppHandle, Runtime};

use crate::models::*;
use crate::SharedContentExt;

/// Launch properties for the first render.
///
/// Carries `sharedContent` when the app was cold-started by a share. Calling
/// this marks the frontend as ready: later shares arrive as `content-shared`
/// events instead.
#[command]
pub(crate) async fn get_launch_props<R: Runtime>(app: AppHandle<R>) -> LaunchProps {
    app.shared_content().take_launch_props()
}
