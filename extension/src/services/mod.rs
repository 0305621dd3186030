// Chrome extension API bindings behind the controller and renderer traits

mod dom;
mod menus;
mod runtime;
mod storage;
mod tabs;

pub use dom::DocumentDom;
pub use menus::ChromeMenus;
pub use runtime::on_message;
pub use storage::ChromeStorage;
pub use tabs::ChromeTabs;
