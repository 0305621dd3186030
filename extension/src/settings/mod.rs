// Wiper settings: visibility flag and rotation speed
// Persisted under two keys in chrome.storage.local

#[cfg(test)]
mod memory;
mod store;

#[cfg(test)]
pub use memory::MemoryStore;
pub use store::SettingsStore;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::WiperError;

pub const KEY_SETTINGS_VISIBLE: &str = "SETTINGS_VISIBLE";
pub const KEY_SETTINGS_SPEED: &str = "SETTINGS_SPEED";

/// Rotation speed multiplier, encoded on the wire and in storage as `sp<N.NN>`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    #[serde(rename = "sp0.25")]
    X0_25,
    #[serde(rename = "sp0.50")]
    X0_50,
    #[serde(rename = "sp0.75")]
    X0_75,
    #[serde(rename = "sp1.00")]
    #[default]
    X1_00,
    #[serde(rename = "sp1.25")]
    X1_25,
    #[serde(rename = "sp1.50")]
    X1_50,
    #[serde(rename = "sp2.00")]
    X2_00,
    #[serde(rename = "sp5.00")]
    X5_00,
    #[serde(rename = "sp10.00")]
    X10_00,
    #[serde(rename = "sp100.00")]
    X100_00,
}

impl Speed {
    /// Menu order, slowest first
    pub const ALL: [Speed; 10] = [
        Speed::X0_25,
        Speed::X0_50,
        Speed::X0_75,
        Speed::X1_00,
        Speed::X1_25,
        Speed::X1_50,
        Speed::X2_00,
        Speed::X5_00,
        Speed::X10_00,
        Speed::X100_00,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Speed::X0_25 => "sp0.25",
            Speed::X0_50 => "sp0.50",
            Speed::X0_75 => "sp0.75",
            Speed::X1_00 => "sp1.00",
            Speed::X1_25 => "sp1.25",
            Speed::X1_50 => "sp1.50",
            Speed::X2_00 => "sp2.00",
            Speed::X5_00 => "sp5.00",
            Speed::X10_00 => "sp10.00",
            Speed::X100_00 => "sp100.00",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::X0_25 => 0.25,
            Speed::X0_50 => 0.5,
            Speed::X0_75 => 0.75,
            Speed::X1_00 => 1.0,
            Speed::X1_25 => 1.25,
            Speed::X1_50 => 1.5,
            Speed::X2_00 => 2.0,
            Speed::X5_00 => 5.0,
            Speed::X10_00 => 10.0,
            Speed::X100_00 => 100.0,
        }
    }

    /// Menu title, e.g. `×1.25`
    pub fn label(self) -> String {
        self.tag().replacen("sp", "×", 1)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Speed {
    type Err = WiperError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.tag() == tag)
            .ok_or_else(|| WiperError::UnknownSpeed(tag.to_string()))
    }
}

/// Fully resolved settings, as rendered by the page and sent on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub visible: bool,
    pub speed: Speed,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            visible: true,
            speed: Speed::default(),
        }
    }
}

/// Settings as found in the store; either key may be missing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoredSettings {
    pub visible: Option<bool>,
    pub speed: Option<Speed>,
}

impl StoredSettings {
    /// Fill missing keys with defaults
    pub fn resolve(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            visible: self.visible.unwrap_or(defaults.visible),
            speed: self.speed.unwrap_or(defaults.speed),
        }
    }
}

/// Partial write; only the `Some` fields are persisted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SettingsPatch {
    #[serde(rename = "SETTINGS_VISIBLE", skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(rename = "SETTINGS_SPEED", skip_serializing_if = "Option::is_none")]
    pub speed: Option<Speed>,
}

impl SettingsPatch {
    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            speed: None,
        }
    }

    pub fn speed(speed: Speed) -> Self {
        Self {
            visible: None,
            speed: Some(speed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_none() && self.speed.is_none()
    }
}

impl From<Settings> for SettingsPatch {
    fn from(settings: Settings) -> Self {
        Self {
            visible: Some(settings.visible),
            speed: Some(settings.speed),
        }
    }
}

/// Raw store record. Values are kept untyped so one bad key never fails the whole read;
/// anything that isn't a valid setting resolves to absent.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(not(any(test, target_arch = "wasm32")), allow(dead_code))]
pub(crate) struct StoredRecord {
    #[serde(rename = "SETTINGS_VISIBLE", default)]
    visible: Option<Value>,
    #[serde(rename = "SETTINGS_SPEED", default)]
    speed: Option<Value>,
}

impl StoredRecord {
    #[cfg_attr(not(any(test, target_arch = "wasm32")), allow(dead_code))]
    pub(crate) fn into_settings(self) -> StoredSettings {
        let visible = self.visible.and_then(|value| match value {
            Value::Bool(visible) => Some(visible),
            Value::Null => None,
            other => {
                log::warn!("Ignoring stored visibility: {}", other);
                None
            }
        });

        let speed = self.speed.and_then(|value| match value {
            Value::String(tag) => match tag.parse::<Speed>() {
                Ok(speed) => Some(speed),
                Err(e) => {
                    log::warn!("Ignoring stored speed: {}", e);
                    None
                }
            },
            Value::Null => None,
            other => {
                log::warn!("Ignoring stored speed: {}", other);
                None
            }
        });

        StoredSettings { visible, speed }
    }
}
