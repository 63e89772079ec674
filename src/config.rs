//! Site Configuration
//!
//! Timing constants and brand strings. Defaults are compiled in; a page can
//! override any of them with a JSON blob in `<script id="flare-config">`.

use serde::Deserialize;

/// DOM id of the optional JSON config element
pub const CONFIG_ELEMENT_ID: &str = "flare-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub tagline: String,
    /// Progress added per analysis tick (1..=100)
    pub progress_step: u8,
    pub progress_interval_ms: u32,
    pub inquiry_delay_ms: u32,
    pub payment_delay_ms: u32,
    pub toast_lifetime_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "FLARE Alert".to_string(),
            tagline: "Where Safety Meets Tech".to_string(),
            progress_step: 10,
            progress_interval_ms: 200,
            inquiry_delay_ms: 1500,
            payment_delay_ms: 2000,
            toast_lifetime_ms: 5000,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let config: SiteConfig = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.progress_step == 0 || self.progress_step > 100 {
            return Err(format!("progress_step must be in 1..=100, got {}", self.progress_step));
        }
        if self.progress_interval_ms == 0 {
            return Err("progress_interval_ms must be positive".to_string());
        }
        Ok(())
    }

    /// Load from the document, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(raw) = raw else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                tracing::info!("loaded site config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                tracing::warn!("ignoring invalid site config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "progress_interval_ms": 50 }"#).unwrap();
        assert_eq!(config.progress_interval_ms, 50);
        assert_eq!(config.progress_step, 10);
        assert_eq!(config.brand_name, "FLARE Alert");
    }

    #[test]
    fn test_rejects_out_of_range_step() {
        assert!(SiteConfig::from_json(r#"{ "progress_step": 0 }"#).is_err());
        assert!(SiteConfig::from_json(r#"{ "progress_step": 101 }"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }
}
