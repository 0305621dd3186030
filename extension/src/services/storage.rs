// Chrome Storage API integration
// Settings live in chrome.storage.local, shared by the worker and every page

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::Result;
use crate::settings::{
    SettingsPatch, SettingsStore, StoredRecord, StoredSettings, KEY_SETTINGS_SPEED,
    KEY_SETTINGS_VISIBLE,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], catch)]
    fn get(keys: JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "storage", "local"], catch)]
    fn set(items: JsValue) -> std::result::Result<js_sys::Promise, JsValue>;
}

#[derive(Clone, Copy, Default)]
pub struct ChromeStorage;

impl ChromeStorage {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl SettingsStore for ChromeStorage {
    async fn get(&self) -> Result<StoredSettings> {
        let keys = js_sys::Array::new();
        keys.push(&KEY_SETTINGS_VISIBLE.into());
        keys.push(&KEY_SETTINGS_SPEED.into());

        let result = JsFuture::from(get(keys.into())?).await?;
        let record: StoredRecord = serde_wasm_bindgen::from_value(result)?;
        Ok(record.into_settings())
    }

    async fn set(&self, patch: SettingsPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let items = serde_wasm_bindgen::to_value(&patch)?;
        JsFuture::from(set(items)?).await?;
        log::debug!("Stored {:?}", patch);
        Ok(())
    }
}
