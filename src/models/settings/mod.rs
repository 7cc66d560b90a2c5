// Settings module
// Display preferences read from settings.toml

use serde::{Deserialize, Serialize};

/// Fastest tick the clock accepts, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 100;
/// Slowest tick the clock accepts. Anything slower could step over the
/// midnight second a celebration is keyed on.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_fullscreen: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// Show a system notification when a celebration starts
    pub desktop_notifications: bool,
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_fullscreen: false,
            window_width: 1280.0,
            window_height: 720.0,
            desktop_notifications: true,
            tick_interval_ms: MAX_TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Tick period with the configured value clamped into the accepted range.
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    /// Window size with absurd values replaced by the defaults.
    pub fn window_size(&self) -> [f32; 2] {
        let defaults = Self::default();
        let width = if self.window_width.is_finite() && self.window_width >= 320.0 {
            self.window_width
        } else {
            defaults.window_width
        };
        let height = if self.window_height.is_finite() && self.window_height >= 220.0 {
            self.window_height
        } else {
            defaults.window_height
        };
        [width, height]
    }
}
