use serde::{Deserialize, Serialize};

fn default_output_path() -> String {
    std::env::temp_dir()
        .join("frost-capture.png")
        .to_string_lossy()
        .into_owned()
}

fn default_focus_settle_ms() -> u64 {
    500
}

fn default_window_poll_ms() -> u64 {
    500
}

fn default_window_timeout_ms() -> u64 {
    3000
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CaptureConfig {
    /// Where `screencapture` writes the window screenshot.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Pause after focusing the window before the screenshot is taken.
    #[serde(default = "default_focus_settle_ms")]
    pub focus_settle_ms: u64,
    /// Poll interval while waiting for a window to appear.
    #[serde(default = "default_window_poll_ms")]
    pub window_poll_ms: u64,
    /// Give up waiting for a window after this long.
    #[serde(default = "default_window_timeout_ms")]
    pub window_timeout_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            focus_settle_ms: default_focus_settle_ms(),
            window_poll_ms: default_window_poll_ms(),
            window_timeout_ms: default_window_timeout_ms(),
        }
    }
}
