use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete device orientation reported to the webview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceOrientation {
    #[serde(rename = "landscapeL")]
    LandscapeLeft,
    #[serde(rename = "landscapeR")]
    LandscapeRight,
    #[serde(rename = "portrait")]
    Portrait,
}

impl DeviceOrientation {
    /// Map a raw sensor angle in degrees to an orientation.
    ///
    /// Only the open bands (250, 290) and (70, 110) are landscape. Everything
    /// else, including the band edges, upside down and the sensor's `-1`
    /// "flat" reading, is portrait.
    pub fn from_angle(degrees: i32) -> Self {
        if degrees > 250 && degrees < 290 {
            DeviceOrientation::LandscapeLeft
        } else if degrees > 70 && degrees < 110 {
            DeviceOrientation::LandscapeRight
        } else {
            DeviceOrientation::Portrait
        }
    }

    /// Name sent as the `orientation-changed` payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceOrientation::LandscapeLeft => "landscapeL",
            DeviceOrientation::LandscapeRight => "landscapeR",
            DeviceOrientation::Portrait => "portrait",
        }
    }
}

impl fmt::Display for DeviceOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one running orientation tracker.
///
/// Returned by `start` and required by `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingHandle(pub u32);

impl fmt::Display for TrackingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sensor sampling rate, matching Android's `SensorManager.SENSOR_DELAY_*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SamplingRate {
    Fastest,
    Game,
    Ui,
    #[default]
    Normal,
}

impl SamplingRate {
    /// Value of the matching `SENSOR_DELAY_*` constant.
    pub fn sensor_delay(&self) -> i32 {
        match self {
            SamplingRate::Fastest => 0,
            SamplingRate::Game => 1,
            SamplingRate::Ui => 2,
            SamplingRate::Normal => 3,
        }
    }

    /// Nominal interval between samples in microseconds.
    pub fn period_us(&self) -> u32 {
        match self {
            SamplingRate::Fastest => 0,
            SamplingRate::Game => 20_000,
            SamplingRate::Ui => 66_667,
            SamplingRate::Normal => 200_000,
        }
    }
}

// android.view.View system UI visibility flags
pub const SYSTEM_UI_FLAG_VISIBLE: u32 = 0;
pub const SYSTEM_UI_FLAG_HIDE_NAVIGATION: u32 = 0x0000_0002;
pub const SYSTEM_UI_FLAG_FULLSCREEN: u32 = 0x0000_0004;
pub const SYSTEM_UI_FLAG_LAYOUT_STABLE: u32 = 0x0000_0100;
pub const SYSTEM_UI_FLAG_LAYOUT_HIDE_NAVIGATION: u32 = 0x0000_0200;
pub const SYSTEM_UI_FLAG_LAYOUT_FULLSCREEN: u32 = 0x0000_0400;
pub const SYSTEM_UI_FLAG_IMMERSIVE_STICKY: u32 = 0x0000_1000;

/// Window chrome state requested by `fullscreen_on` / `fullscreen_off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowChrome {
    /// Status and navigation bars hidden, swiping reveals them briefly.
    Immersive,
    Visible,
}

impl WindowChrome {
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, WindowChrome::Immersive)
    }

    /// Flag bag passed to `View.setSystemUiVisibility`.
    pub fn system_ui_flags(&self) -> u32 {
        match self {
            WindowChrome::Immersive => {
                SYSTEM_UI_FLAG_LAYOUT_STABLE
                    | SYSTEM_UI_FLAG_LAYOUT_HIDE_NAVIGATION
                    | SYSTEM_UI_FLAG_LAYOUT_FULLSCREEN
                    | SYSTEM_UI_FLAG_HIDE_NAVIGATION
                    | SYSTEM_UI_FLAG_FULLSCREEN
                    | SYSTEM_UI_FLAG_IMMERSIVE_STICKY
            }
            WindowChrome::Visible => SYSTEM_UI_FLAG_VISIBLE,
        }
    }
}
