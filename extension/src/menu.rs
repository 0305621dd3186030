// Context menu tree and click classification

use serde::Serialize;

use crate::config::MenuTitles;
use crate::settings::{Settings, SettingsPatch, Speed};

pub const ROOT_ID: &str = "root";
pub const VISIBILITY_MENU_ID: &str = "visibleSettings";
pub const SPEED_MENU_ID: &str = "speedSettings";
pub const VISIBLE_ID: &str = "visible";
pub const INVISIBLE_ID: &str = "invisible";

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Normal,
    Radio,
}

/// Create properties for one chrome.contextMenus item
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MenuKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    pub contexts: Vec<&'static str>,
}

impl MenuItem {
    fn submenu(id: &str, parent: Option<&str>, title: &str) -> Self {
        Self {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            title: title.to_string(),
            kind: MenuKind::Normal,
            checked: None,
            contexts: vec!["all"],
        }
    }

    fn radio(id: &str, parent: &str, title: String, checked: bool) -> Self {
        Self {
            id: id.to_string(),
            parent_id: Some(parent.to_string()),
            title,
            kind: MenuKind::Radio,
            checked: Some(checked),
            contexts: vec!["all"],
        }
    }
}

/// Full menu tree in creation order, parents before children.
///
/// Exactly one radio item per submenu is checked, matching `current`.
pub fn build_menu(titles: &MenuTitles, current: &Settings) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem::submenu(ROOT_ID, None, &titles.root),
        MenuItem::submenu(VISIBILITY_MENU_ID, Some(ROOT_ID), &titles.visibility),
        MenuItem::radio(
            VISIBLE_ID,
            VISIBILITY_MENU_ID,
            titles.on.clone(),
            current.visible,
        ),
        MenuItem::radio(
            INVISIBLE_ID,
            VISIBILITY_MENU_ID,
            titles.off.clone(),
            !current.visible,
        ),
        MenuItem::submenu(SPEED_MENU_ID, Some(ROOT_ID), &titles.speed),
    ];

    items.extend(Speed::ALL.into_iter().map(|speed| {
        MenuItem::radio(
            speed.tag(),
            SPEED_MENU_ID,
            speed.label(),
            speed == current.speed,
        )
    }));

    items
}

/// A clickable leaf of the menu tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Visibility(bool),
    Speed(Speed),
}

impl MenuChoice {
    /// `None` for submenu ids and anything we didn't create
    pub fn from_item_id(id: &str) -> Option<Self> {
        match id {
            VISIBLE_ID => Some(MenuChoice::Visibility(true)),
            INVISIBLE_ID => Some(MenuChoice::Visibility(false)),
            _ => id.parse::<Speed>().ok().map(MenuChoice::Speed),
        }
    }

    pub fn apply(self, current: Settings) -> Settings {
        match self {
            MenuChoice::Visibility(visible) => Settings { visible, ..current },
            MenuChoice::Speed(speed) => Settings { speed, ..current },
        }
    }

    /// Single-field write for this choice
    pub fn patch(self) -> SettingsPatch {
        match self {
            MenuChoice::Visibility(visible) => SettingsPatch::visible(visible),
            MenuChoice::Speed(speed) => SettingsPatch::speed(speed),
        }
    }
}
