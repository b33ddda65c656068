use serde::{Deserialize, Serialize};

fn default_delay_secs() -> u64 {
    10
}

fn default_click_settle_ms() -> u64 {
    60
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AutomationConfig {
    /// Delay between iterations in seconds.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    /// Pick a uniform random delay in `[0, delay_secs)` instead.
    pub random_delay: bool,
    /// Stop after this many iterations; 0 runs until cancelled.
    pub iterations: u64,
    /// Save annotated screenshots for every accepted match.
    pub debug: bool,
    /// Pause between moving the cursor and pressing the button.
    #[serde(default = "default_click_settle_ms")]
    pub click_settle_ms: u64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
            random_delay: false,
            iterations: 0,
            debug: false,
            click_settle_ms: default_click_settle_ms(),
        }
    }
}
