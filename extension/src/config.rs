// Extension configuration, embedded from wiper.toml at build time

use serde::Deserialize;

use crate::error::Result;

const EMBEDDED_CONFIG: &str = include_str!("../wiper.toml");

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct WiperConfig {
    #[serde(default)]
    pub menu: MenuTitles,
    #[serde(default)]
    pub resources: ResourceConfig,
}

/// Context menu titles; speed items are titled from their multiplier
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MenuTitles {
    pub root: String,
    pub visibility: String,
    pub speed: String,
    pub on: String,
    pub off: String,
}

impl Default for MenuTitles {
    fn default() -> Self {
        Self {
            root: "外覇(ワイパァー) 設定".to_string(),
            visibility: "表示".to_string(),
            speed: "速度".to_string(),
            on: "ON".to_string(),
            off: "OFF".to_string(),
        }
    }
}

/// Extension-relative image paths
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ResourceConfig {
    pub root_image: String,
    pub branch_image: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            root_image: "resource/wiper_root.png".to_string(),
            branch_image: "resource/wiper_branch.png".to_string(),
        }
    }
}

impl WiperConfig {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Embedded config, or the built-in defaults if it doesn't parse
    pub fn load() -> Self {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to parse embedded config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = WiperConfig::parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, WiperConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = WiperConfig::parse("[menu]\non = \"Show\"\n").unwrap();
        assert_eq!(config.menu.on, "Show");
        assert_eq!(config.menu.off, "OFF");
        assert_eq!(config.resources, ResourceConfig::default());
    }

    #[test]
    fn test_broken_config_is_an_error() {
        assert!(WiperConfig::parse("[menu\nroot = ").is_err());
    }
}
