//! Implementation for platforms without a native sensor bridge.
//!
//! A tracker only sees the angles the host pushes through
//! [`ScreenOrientation::sample_sender`]. On desktop, fullscreen maps to the
//! focused webview window.

use tauri::{plugin::PluginApi, AppHandle, Manager, Runtime};
use tracing::debug;

use crate::config::Config;
use crate::events::orientation_emitter;
use crate::models::*;
use crate::tracker::{OrientationTracker, SampleSender, TrackerRegistry};

/// Initialize the plugin.
///
/// The configured sampling rate only applies to the Android sensor and is not
/// read here.
pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    _api: PluginApi<R, Option<Config>>,
) -> crate::Result<ScreenOrientation<R>> {
    Ok(ScreenOrientation {
        app: app.clone(),
        trackers: TrackerRegistry::new(),
    })
}

/// Access to the orientation APIs for desktop platforms.
pub struct ScreenOrientation<R: Runtime> {
    app: AppHandle<R>,
    trackers: TrackerRegistry,
}

impl<R: Runtime> ScreenOrientation<R> {
    /// Start a tracker emitting `orientation-changed` events.
    pub fn start(&self) -> crate::Result<TrackingHandle> {
        let handle = self.trackers.next_handle();
        let tracker = OrientationTracker::spawn(handle, orientation_emitter(self.app.clone()));
        self.trackers.insert(tracker);
        Ok(handle)
    }

    pub fn stop(&self, handle: TrackingHandle) -> crate::Result<()> {
        self.trackers.remove(handle)?.stop();
        Ok(())
    }

    /// Feed angles into a running tracker, e.g. from an external sensor.
    pub fn sample_sender(&self, handle: TrackingHandle) -> crate::Result<SampleSender> {
        self.trackers.sample_sender(handle)
    }

    /// Apply `chrome` to the focused window. Does nothing without one.
    #[cfg(desktop)]
    pub fn set_chrome(&self, chrome: WindowChrome) -> crate::Result<()> {
        let focused = self
            .app
            .webview_windows()
            .into_values()
            .find(|window| window.is_focused().unwrap_or(false));

        match focused {
            Some(window) => window.set_fullscreen(chrome.is_fullscreen())?,
            None => debug!("No foreground window, ignoring {:?}", chrome),
        }
        Ok(())
    }

    #[cfg(not(desktop))]
    pub fn set_chrome(&self, chrome: WindowChrome) -> crate::Result<()> {
        debug!("Window chrome is not controllable here, ignoring {:?}", chrome);
        Ok(())
    }
}
