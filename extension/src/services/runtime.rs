// chrome.runtime bindings for the content script

use js_sys::Function;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    fn get_url(path: &str) -> String;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime", "onMessage"], js_name = addListener)]
    fn add_message_listener(callback: &Function);
}

pub fn resource_url(path: &str) -> String {
    get_url(path)
}

/// Register for one-shot messages. Every message is acknowledged with `{}`,
/// after `handler` has seen its string payload (non-string payloads are skipped).
pub fn on_message(mut handler: impl FnMut(&str) + 'static) {
    let closure = Closure::<dyn FnMut(JsValue, JsValue, Function) -> bool>::new(
        move |message: JsValue, _sender: JsValue, send_response: Function| {
            match message.as_string() {
                Some(raw) => handler(&raw),
                None => log::debug!("Ignoring non-string message"),
            }

            if let Err(e) = send_response.call1(&JsValue::UNDEFINED, &js_sys::Object::new()) {
                log::debug!("Failed to acknowledge message: {:?}", e);
            }
            true
        },
    );
    add_message_listener(closure.as_ref().unchecked_ref());
    closure.forget();
}
