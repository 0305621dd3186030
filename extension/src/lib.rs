//! Chrome Wiper: a pair of animated wipers drawn over every page.
//!
//! The background worker ([`controller`]) owns the settings and the context
//! menu; the content script ([`renderer`]) draws the wipers and follows
//! updates pushed from the worker.

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod message;
pub mod renderer;
pub mod settings;

#[cfg(target_arch = "wasm32")]
mod background;
#[cfg(target_arch = "wasm32")]
mod content;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use background::{handle_install, handle_menu_click, start_background};
#[cfg(target_arch = "wasm32")]
pub use content::start_content;

pub use error::{Result, WiperError};
