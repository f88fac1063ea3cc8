//! Android implementation bridging to the native orientation sensor.
//!
//! The Android plugin wraps an `OrientationEventListener` per tracker and
//! streams raw angles back through a channel; debouncing happens here.

use serde::{Deserialize, Serialize};
use tauri::{
    ipc::{Channel, InvokeResponseBody},
    plugin::{PluginApi, PluginHandle},
    AppHandle, Runtime,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::events::orientation_emitter;
use crate::models::*;
use crate::tracker::{OrientationTracker, SampleSender, TrackerRegistry};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartSensorArgs {
    id: TrackingHandle,
    sensor_delay: i32,
    on_sample: Channel,
}

#[derive(Serialize)]
struct StopSensorArgs {
    id: TrackingHandle,
}

#[derive(Serialize)]
struct SystemUiArgs {
    flags: u32,
}

#[derive(Deserialize)]
struct AngleSample {
    angle: i32,
}

/// Initialize the mobile plugin by registering native code.
pub fn init<R: Runtime>(
    app: &AppHandle<R>,
    api: PluginApi<R, Option<Config>>,
) -> crate::Result<ScreenOrientation<R>> {
    let config = api.config().clone().unwrap_or_default();

    let handle =
        api.register_android_plugin("chat.quadrix.plugins.orientation", "OrientationPlugin")?;

    Ok(ScreenOrientation {
        app: app.clone(),
        handle,
        config,
        trackers: TrackerRegistry::new(),
    })
}

/// Access to the orientation mobile APIs.
pub struct ScreenOrientation<R: Runtime> {
    app: AppHandle<R>,
    handle: PluginHandle<R>,
    config: Config,
    trackers: TrackerRegistry,
}

impl<R: Runtime> ScreenOrientation<R> {
    /// Enable the sensor and start a tracker emitting `orientation-changed` events.
    pub fn start(&self) -> crate::Result<TrackingHandle> {
        let id = self.trackers.next_handle();
        let tracker = OrientationTracker::spawn(id, orientation_emitter(self.app.clone()));

        let samples = tracker.sample_sender();
        let on_sample = Channel::new(move |body| {
            if let InvokeResponseBody::Json(json) = body {
                match serde_json::from_str::<AngleSample>(&json) {
                    Ok(sample) => samples.push(sample.angle),
                    Err(e) => warn!("Malformed orientation sample: {}", e),
                }
            }
            Ok(())
        });

        let args = StartSensorArgs {
            id,
            sensor_delay: self.config.sampling_rate.sensor_delay(),
            on_sample,
        };
        if let Err(e) = self.handle.run_mobile_plugin::<serde_json::Value>("startSensor", args) {
            tracker.stop();
            return Err(e.into());
        }

        debug!("Orientation sensor {} enabled", id);
        self.trackers.insert(tracker);
        Ok(id)
    }

    /// Disable the sensor behind `id` and stop its tracker.
    pub fn stop(&self, id: TrackingHandle) -> crate::Result<()> {
        self.trackers.remove(id)?.stop();
        self.handle
            .run_mobile_plugin::<serde_json::Value>("stopSensor", StopSensorArgs { id })?;
        Ok(())
    }

    pub fn sample_sender(&self, id: TrackingHandle) -> crate::Result<SampleSender> {
        self.trackers.sample_sender(id)
    }

    /// Set the system UI flags on the foreground activity's window.
    ///
    /// The native side ignores the call when no activity is in the foreground.
    pub fn set_chrome(&self, chrome: WindowChrome) -> crate::Result<()> {
        let flags = chrome.system_ui_flags();
        let args = SystemUiArgs { flags };
        self.handle
            .run_mobile_plugin::<serde_json::Value>("setSystemUiVisibility", args)?;
        Ok(())
    }
}
