use serde::{Deserialize, Serialize};

fn default_app_name() -> String {
    "WhiteoutSurvival".to_string()
}

/// Which application the bot drives.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TargetConfig {
    /// Process name as System Events reports it.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}
