use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::controller::TabNotifier;
use crate::error::{Result, WiperError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], catch)]
    fn query(query_info: JsValue) -> std::result::Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "tabs"], js_name = sendMessage, catch)]
    fn send_message(tab_id: f64, message: JsValue)
        -> std::result::Result<js_sys::Promise, JsValue>;
}

/// chrome.tabs messaging to the content script of the focused tab
#[derive(Clone, Copy, Default)]
pub struct ChromeTabs;

impl ChromeTabs {
    pub fn new() -> Self {
        Self
    }

    async fn active_tab_id(&self) -> Result<f64> {
        let query_info = js_sys::Object::new();
        js_sys::Reflect::set(&query_info, &"active".into(), &JsValue::TRUE)?;
        js_sys::Reflect::set(&query_info, &"lastFocusedWindow".into(), &JsValue::TRUE)?;

        let tabs: js_sys::Array = JsFuture::from(query(query_info.into())?)
            .await?
            .dyn_into()?;

        let tab = tabs.get(0);
        if tab.is_undefined() {
            return Err(WiperError::NoActiveTab);
        }

        js_sys::Reflect::get(&tab, &"id".into())?
            .as_f64()
            .ok_or(WiperError::NoActiveTab)
    }
}

#[async_trait(?Send)]
impl TabNotifier for ChromeTabs {
    async fn send_to_active_tab(&self, payload: &str) -> Result<()> {
        let tab_id = self.active_tab_id().await?;
        JsFuture::from(send_message(tab_id, payload.into())?).await?;
        Ok(())
    }
}
