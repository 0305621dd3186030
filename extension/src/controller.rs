// Background controller: owns the settings, the context menu, and pushes
// updates to the active tab

use async_trait::async_trait;
use futures::lock::Mutex;

use crate::config::MenuTitles;
use crate::error::Result;
use crate::menu::{build_menu, MenuChoice, MenuItem};
use crate::message::WiperMessage;
use crate::settings::{Settings, SettingsPatch, SettingsStore};

/// Host context menu API
#[async_trait(?Send)]
pub trait MenuHost {
    async fn remove_all(&self) -> Result<()>;

    async fn create(&self, item: &MenuItem) -> Result<()>;
}

/// Delivery of a message to the active tab's content script.
///
/// May fail when there is no active tab or the page has no listener yet.
#[async_trait(?Send)]
pub trait TabNotifier {
    async fn send_to_active_tab(&self, payload: &str) -> Result<()>;
}

/// Result of a menu click, before any side effect runs
#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    pub settings: Settings,
    pub patch: SettingsPatch,
    pub message: WiperMessage,
}

impl Reaction {
    pub fn new(choice: MenuChoice, current: Settings) -> Self {
        let settings = choice.apply(current);
        Self {
            settings,
            patch: choice.patch(),
            message: WiperMessage::UpdateWiper { settings },
        }
    }
}

/// Work out what a click on `item_id` changes. `None` for ids that aren't choices.
pub fn react(item_id: &str, current: Settings) -> Option<Reaction> {
    MenuChoice::from_item_id(item_id).map(|choice| Reaction::new(choice, current))
}

pub struct Controller<S, M, N> {
    store: S,
    menus: M,
    notifier: N,
    titles: MenuTitles,
    // held across remove_all + create so two rebuilds never interleave
    rebuild: Mutex<()>,
}

impl<S, M, N> Controller<S, M, N>
where
    S: SettingsStore,
    M: MenuHost,
    N: TabNotifier,
{
    pub fn new(store: S, menus: M, notifier: N, titles: MenuTitles) -> Self {
        Self {
            store,
            menus,
            notifier,
            titles,
            rebuild: Mutex::new(()),
        }
    }

    /// Current settings with defaults for missing keys
    pub async fn settings(&self) -> Result<Settings> {
        Ok(self.store.get().await?.resolve())
    }

    /// Worker startup: rebuild the context menu from stored settings
    pub async fn initialize(&self) -> Result<()> {
        let _guard = self.rebuild.lock().await;
        let settings = self.settings().await?;

        self.menus.remove_all().await?;
        for item in build_menu(&self.titles, &settings) {
            self.menus.create(&item).await?;
        }

        log::info!(
            "Context menu built (visible: {}, speed: {})",
            settings.visible,
            settings.speed
        );
        Ok(())
    }

    /// Install or update: seed defaults on an empty store, then rebuild the menu
    pub async fn on_install(&self) -> Result<()> {
        let stored = self.store.get().await?;
        if stored.visible.is_none() {
            log::info!("No stored settings, writing defaults");
            self.store
                .set(SettingsPatch::from(Settings::default()))
                .await?;
        }

        self.initialize().await
    }

    /// Persist the clicked choice and push the result to the active tab
    pub async fn on_menu_click(&self, item_id: &str) -> Result<()> {
        let Some(choice) = MenuChoice::from_item_id(item_id) else {
            log::debug!("Ignoring click on menu item {}", item_id);
            return Ok(());
        };

        let reaction = Reaction::new(choice, self.settings().await?);
        self.store.set(reaction.patch).await?;
        self.notify_active_tab().await;
        Ok(())
    }

    /// Best effort push of the stored settings. Returns whether the tab got it.
    pub async fn notify_active_tab(&self) -> bool {
        let message = match self.settings().await {
            Ok(settings) => WiperMessage::UpdateWiper { settings },
            Err(e) => {
                log::warn!("Cannot read settings for notification: {}", e);
                return false;
            }
        };

        let payload = match message.encode() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Cannot encode notification: {}", e);
                return false;
            }
        };

        match self.notifier.send_to_active_tab(&payload).await {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Active tab not notified: {}", e);
                false
            }
        }
    }
}
