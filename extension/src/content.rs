// Content script entry: mounts the wipers and listens for updates

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::WiperConfig;
use crate::renderer::Renderer;
use crate::services::{on_message, ChromeStorage, DocumentDom};

#[wasm_bindgen]
pub fn start_content() {
    wasm_logger::init(wasm_logger::Config::default());

    let dom = match DocumentDom::new() {
        Ok(dom) => dom,
        Err(e) => {
            log::error!("Chrome Wiper cannot attach to this page: {}", e);
            return;
        }
    };
    let renderer = Rc::new(Renderer::new(dom, WiperConfig::load().resources));

    let listener = renderer.clone();
    on_message(move |raw| {
        listener.on_notification(raw);
    });

    spawn_local(async move {
        if let Err(e) = renderer.initialize(&ChromeStorage::new()).await {
            log::error!("Failed to mount wipers: {}", e);
        }
    });
}
