// Background service worker for Chrome Wiper
// background.js registers the chrome listeners synchronously at top level and
// forwards each event here once the module is loaded

use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

use crate::config::WiperConfig;
use crate::controller::Controller;
use crate::services::{ChromeMenus, ChromeStorage, ChromeTabs};

type ChromeController = Controller<ChromeStorage, ChromeMenus, ChromeTabs>;

thread_local! {
    static CONTROLLER: OnceCell<Rc<ChromeController>> = const { OnceCell::new() };
}

/// Shared controller, built on first use by whichever entry point runs first
fn controller() -> Rc<ChromeController> {
    CONTROLLER.with(|cell| {
        cell.get_or_init(|| {
            Rc::new(Controller::new(
                ChromeStorage::new(),
                ChromeMenus::new(),
                ChromeTabs::new(),
                WiperConfig::load().menu,
            ))
        })
        .clone()
    })
}

/// Worker startup: rebuild the context menu from stored settings
#[wasm_bindgen]
pub async fn start_background() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chrome Wiper background starting...");

    if let Err(e) = controller().initialize().await {
        log::error!("Background initialization failed: {}", e);
    }
}

/// chrome.runtime.onInstalled
#[wasm_bindgen]
pub async fn handle_install() {
    log::info!("Extension installed or updated");

    if let Err(e) = controller().on_install().await {
        log::error!("Install handling failed: {}", e);
    }
}

/// chrome.contextMenus.onClicked, with the clicked item's id
#[wasm_bindgen]
pub async fn handle_menu_click(item_id: String) {
    if let Err(e) = controller().on_menu_click(&item_id).await {
        log::error!("Menu click {} failed: {}", item_id, e);
    }
}
