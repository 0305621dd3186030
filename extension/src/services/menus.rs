use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::controller::MenuHost;
use crate::error::Result;
use crate::menu::MenuItem;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "contextMenus"], catch)]
    fn create(properties: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "contextMenus"], js_name = removeAll, catch)]
    fn remove_all() -> std::result::Result<js_sys::Promise, JsValue>;
}

/// chrome.contextMenus
#[derive(Clone, Copy, Default)]
pub struct ChromeMenus;

impl ChromeMenus {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl MenuHost for ChromeMenus {
    async fn remove_all(&self) -> Result<()> {
        JsFuture::from(remove_all()?).await?;
        Ok(())
    }

    async fn create(&self, item: &MenuItem) -> Result<()> {
        let properties = serde_wasm_bindgen::to_value(item)?;
        create(properties)?;
        Ok(())
    }
}
