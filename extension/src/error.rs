use wasm_bindgen::JsValue;

/// Errors raised by the settings store, the menu controller and the page renderer
#[derive(Debug, thiserror::Error)]
pub enum WiperError {
    #[error("unknown speed tag: {0}")]
    UnknownSpeed(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("no active tab")]
    NoActiveTab,

    #[error("page has no document body")]
    NoBody,

    #[error("host call failed: {0}")]
    Host(String),
}

pub type Result<T> = std::result::Result<T, WiperError>;

impl From<JsValue> for WiperError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WiperError::Host(text)
    }
}

impl From<serde_wasm_bindgen::Error> for WiperError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        WiperError::Host(err.to_string())
    }
}
