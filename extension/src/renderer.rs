// Content script renderer: injects the two wipers and keeps their
// visibility and rotation speed in sync with the settings

use crate::animation::{calc_duration, rotation_style, HIDDEN_STYLE, ROTATION, ROTATION_BRANCH};
use crate::config::ResourceConfig;
use crate::error::Result;
use crate::message::WiperMessage;
use crate::settings::{Settings, SettingsStore};

pub const WIPER_BASE_CLASS: &str = "chrome-wiper-base";
pub const WIPER_CLASS: &str = "chrome-wiper";
pub const RIGHT_POSITION_CLASS: &str = "wiper-position-right";
pub const ROOT_CLASS: &str = "wiper-root";
pub const BRANCH_CLASS: &str = "wiper-branch";
pub const BRANCH_IMAGE_CLASS: &str = "branch__img";

/// The page's DOM, reduced to what the renderer touches
pub trait PageDom {
    type Element;

    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<Self::Element>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&self, element: &Self::Element, name: &str) -> Result<()>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<()>;

    fn append_to_body(&self, element: &Self::Element) -> Result<()>;

    /// Elements currently attached to the document that carry `class`
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// Absolute URL of a file packaged with the extension
    fn resource_url(&self, path: &str) -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub struct Renderer<D> {
    dom: D,
    resources: ResourceConfig,
}

impl<D: PageDom> Renderer<D> {
    pub fn new(dom: D, resources: ResourceConfig) -> Self {
        Self { dom, resources }
    }

    /// Page load: read settings, mount both wipers and style them
    pub async fn initialize<S: SettingsStore>(&self, store: &S) -> Result<Settings> {
        let settings = store.get().await?.resolve();

        self.mount(Side::Left)?;
        self.mount(Side::Right)?;
        self.apply_settings(&settings)?;

        log::info!(
            "Wipers mounted (visible: {}, speed: {})",
            settings.visible,
            settings.speed
        );
        Ok(settings)
    }

    /// Append one wiper: a base span holding the root image and the branch span
    pub fn mount(&self, side: Side) -> Result<()> {
        let mut base_classes = vec![WIPER_BASE_CLASS, WIPER_CLASS];
        if side == Side::Right {
            base_classes.push(RIGHT_POSITION_CLASS);
        }
        let base = self.dom.create_element("span", &base_classes)?;

        let root = self.dom.create_element("img", &[ROOT_CLASS])?;
        self.dom
            .set_attribute(&root, "src", &self.dom.resource_url(&self.resources.root_image))?;
        self.dom.append_child(&base, &root)?;

        let branch = self
            .dom
            .create_element("span", &[WIPER_CLASS, BRANCH_CLASS])?;
        let branch_img = self.dom.create_element("img", &[BRANCH_IMAGE_CLASS])?;
        self.dom.set_attribute(
            &branch_img,
            "src",
            &self.dom.resource_url(&self.resources.branch_image),
        )?;
        self.dom.append_child(&branch, &branch_img)?;
        self.dom.append_child(&base, &branch)?;

        self.dom.append_to_body(&base)
    }

    /// Restyle every wiper on the page. Idempotent.
    pub fn apply_settings(&self, settings: &Settings) -> Result<()> {
        for base in self.dom.elements_by_class(WIPER_BASE_CLASS) {
            if settings.visible {
                self.dom.remove_attribute(&base, "style")?;
            } else {
                self.dom.set_attribute(&base, "style", HIDDEN_STYLE)?;
            }
        }

        let duration = calc_duration(settings.speed.multiplier());
        let rotation = rotation_style(ROTATION, duration);
        let branch_rotation = rotation_style(ROTATION_BRANCH, duration);

        for class in [ROOT_CLASS, BRANCH_CLASS] {
            for element in self.dom.elements_by_class(class) {
                self.dom.set_attribute(&element, "style", &rotation)?;
            }
        }
        for element in self.dom.elements_by_class(BRANCH_IMAGE_CLASS) {
            self.dom.set_attribute(&element, "style", &branch_rotation)?;
        }

        Ok(())
    }

    /// Handle a raw message from the background. Returns the settings applied, if any.
    ///
    /// Never fails; the caller acknowledges the message either way.
    pub fn on_notification(&self, raw: &str) -> Option<Settings> {
        let settings = match WiperMessage::decode(raw) {
            Ok(WiperMessage::UpdateWiper { settings }) => settings,
            Err(e) => {
                log::debug!("Ignoring message: {}", e);
                return None;
            }
        };

        match self.apply_settings(&settings) {
            Ok(()) => Some(settings),
            Err(e) => {
                log::warn!("Failed to update wipers: {}", e);
                None
            }
        }
    }
}
