use serde::{Deserialize, Serialize};

fn default_templates_dir() -> String {
    "images".to_string()
}

fn default_handshake_template() -> String {
    "handshake_icon.png".to_string()
}

fn default_dismiss_template() -> String {
    "dismiss_icon.png".to_string()
}

fn default_score_threshold() -> f64 {
    0.75
}

fn default_scale_relax() -> f64 {
    0.2
}

fn default_min_threshold() -> f64 {
    0.6
}

fn default_scales() -> Vec<f64> {
    vec![1.0, 0.9, 1.1, 0.8, 1.2]
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MatchingConfig {
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Help icon that grants an alliance handshake when clicked.
    #[serde(default = "default_handshake_template")]
    pub handshake_template: String,
    /// "X" that closes popup dialogs covering the play area.
    #[serde(default = "default_dismiss_template")]
    pub dismiss_template: String,
    /// Acceptance threshold for a match found at scale 1.0.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,
    /// How much the threshold relaxes per unit of distance from scale 1.0.
    #[serde(default = "default_scale_relax")]
    pub scale_relax: f64,
    /// The threshold never slides below this.
    #[serde(default = "default_min_threshold")]
    pub min_threshold: f64,
    /// Template scales to try, in order of preference.
    #[serde(default = "default_scales")]
    pub scales: Vec<f64>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            handshake_template: default_handshake_template(),
            dismiss_template: default_dismiss_template(),
            score_threshold: default_score_threshold(),
            scale_relax: default_scale_relax(),
            min_threshold: default_min_threshold(),
            scales: default_scales(),
        }
    }
}
