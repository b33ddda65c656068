use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::automation::AutomationConfig;
use self::capture::CaptureConfig;
use self::matching::MatchingConfig;
use self::target::TargetConfig;

pub mod automation;
pub mod capture;
pub mod matching;
pub mod target;

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub target: TargetConfig,
    pub capture: CaptureConfig,
    pub matching: MatchingConfig,
    pub automation: AutomationConfig,
}

impl Config {
    /// Defaults overlaid with any `FROST_*` environment variables.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(v) = env::var("FROST_APP_NAME") {
            self.target.app_name = v;
        }
        if let Ok(v) = env::var("FROST_CAPTURE_PATH") {
            self.capture.output_path = v;
        }
        if let Some(v) = env_parse("FROST_FOCUS_SETTLE_MS") {
            self.capture.focus_settle_ms = v;
        }
        if let Some(v) = env_parse("FROST_WINDOW_POLL_MS") {
            self.capture.window_poll_ms = v;
        }
        if let Some(v) = env_parse("FROST_WINDOW_TIMEOUT_MS") {
            self.capture.window_timeout_ms = v;
        }
        if let Ok(v) = env::var("FROST_TEMPLATES_DIR") {
            self.matching.templates_dir = v;
        }
        if let Some(v) = env_parse("FROST_SCORE_THRESHOLD") {
            self.matching.score_threshold = v;
        }
        if let Some(v) = env_parse("FROST_MIN_THRESHOLD") {
            self.matching.min_threshold = v;
        }
        if let Some(v) = env_parse("FROST_SCALE_RELAX") {
            self.matching.scale_relax = v;
        }
        if let Ok(v) = env::var("FROST_SCALES") {
            if let Some(scales) = parse_scales(&v) {
                self.matching.scales = scales;
            }
        }
        if let Some(v) = env_parse("FROST_DELAY_SECS") {
            self.automation.delay_secs = v;
        }
        if let Some(v) = env_parse("FROST_RANDOM_DELAY") {
            self.automation.random_delay = v;
        }
        if let Some(v) = env_parse("FROST_ITERATIONS") {
            self.automation.iterations = v;
        }
        if let Some(v) = env_parse("FROST_DEBUG") {
            self.automation.debug = v;
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Parse a comma-separated scale list, e.g. `"1.0,0.9,1.1"`.
/// Returns `None` if any entry is malformed or non-positive.
fn parse_scales(raw: &str) -> Option<Vec<f64>> {
    let scales: Vec<f64> = raw
        .split(',')
        .map(|s| s.trim().parse().ok())
        .collect::<Option<Vec<f64>>>()?;
    if scales.is_empty() || scales.iter().any(|s| *s <= 0.0) {
        return None;
    }
    Some(scales)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.target.app_name, "WhiteoutSurvival");
        assert_eq!(config.automation.delay_secs, 10);
        assert_eq!(config.automation.iterations, 0);
        assert!(!config.automation.random_delay);
        assert!((config.matching.score_threshold - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.matching.scales[0], 1.0);
    }

    #[test]
    fn env_overrides_applied() {
        unsafe {
            env::set_var("FROST_DELAY_SECS", "3");
            env::set_var("FROST_APP_NAME", "SomeOtherGame");
        }
        let config = Config::new();
        unsafe {
            env::remove_var("FROST_DELAY_SECS");
            env::remove_var("FROST_APP_NAME");
        }
        assert_eq!(config.automation.delay_secs, 3);
        assert_eq!(config.target.app_name, "SomeOtherGame");
    }

    #[test]
    fn scale_list_parsing() {
        assert_eq!(parse_scales("1.0, 0.9,1.1"), Some(vec![1.0, 0.9, 1.1]));
        assert_eq!(parse_scales("1.0,zero"), None);
        assert_eq!(parse_scales("1.0,-0.5"), None);
        assert_eq!(parse_scales(""), None);
    }
}
