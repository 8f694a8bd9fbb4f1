use serde::Deserialize;

use crate::dom;

/// Id of the optional `<script type="application/json">` block that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "financeflow-config";

/// Tunables for the landing page behaviors. Distances are in pixels, durations in milliseconds.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    pub scroll_offset: u32,
    pub animation_offset: u32,
    pub animation_duration: u32,
    pub faq_transition: u32,
    pub tab_transition: u32,
    pub navbar_threshold: u32,
    pub scroll_throttle: u64,
    pub resize_debounce: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_offset: 100,
            animation_offset: 100,
            animation_duration: 600,
            faq_transition: 300,
            tab_transition: 200,
            navbar_threshold: 50,
            scroll_throttle: 100,
            resize_debounce: 200,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the inline config block if the page ships one. Never fails: a missing
    /// block or a malformed one falls back to the defaults.
    pub fn load() -> Self {
        let raw = match dom::element_text(&format!("#{}", CONFIG_ELEMENT_ID)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::debug!("No inline config: {}", e);
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
