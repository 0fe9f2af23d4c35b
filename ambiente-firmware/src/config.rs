//! Panel configuration
//!
//! `panel.toml` is embedded at build time (and validated by build.rs), then
//! parsed at boot. Falls back to embedded defaults if parsing fails.

use defmt::*;

use ambiente_core::config::{parse_config, PanelConfig};

/// Configuration shipped with the firmware image
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// Load the panel configuration
pub fn load() -> PanelConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded panel.toml: thresholds {:?}", config.thresholds);
            config
        }
        Err(e) => {
            error!("panel.toml rejected ({:?}), using defaults", e);
            PanelConfig::default()
        }
    }
}
