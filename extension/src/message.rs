// Background -> content script messages
// Sent as a JSON string through chrome.tabs.sendMessage

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::Settings;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WiperMessage {
    /// Apply new visibility and speed to every wiper on the page
    UpdateWiper { settings: Settings },
}

impl WiperMessage {
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Speed;

    #[test]
    fn test_wire_format() {
        let message = WiperMessage::UpdateWiper {
            settings: Settings {
                visible: false,
                speed: Speed::X5_00,
            },
        };
        let value: serde_json::Value = serde_json::from_str(&message.encode().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "updateWiper",
                "settings": { "visible": false, "speed": "sp5.00" }
            })
        );
    }

    #[test]
    fn test_decode() {
        let raw = r#"{"type":"updateWiper","settings":{"visible":true,"speed":"sp0.25"}}"#;
        assert_eq!(
            WiperMessage::decode(raw).unwrap(),
            WiperMessage::UpdateWiper {
                settings: Settings {
                    visible: true,
                    speed: Speed::X0_25,
                },
            }
        );
    }

    #[test]
    fn test_decode_rejects_other_messages() {
        assert!(WiperMessage::decode(r#"{"type":"somethingElse"}"#).is_err());
        assert!(WiperMessage::decode(r#"{"settings":{"visible":true,"speed":"sp1.00"}}"#).is_err());
        assert!(WiperMessage::decode("not json").is_err());
        assert!(WiperMessage::decode(
            r#"{"type":"updateWiper","settings":{"visible":true,"speed":"sp0"}}"#
        )
        .is_err());
    }
}
