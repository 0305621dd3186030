use web_sys::{Document, Element};

use super::runtime::resource_url;
use crate::error::{Result, WiperError};
use crate::renderer::PageDom;

/// The content script's view of the page document
pub struct DocumentDom {
    document: Document,
}

impl DocumentDom {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| WiperError::Host("no document".to_string()))?;
        Ok(Self { document })
    }
}

impl PageDom for DocumentDom {
    type Element = Element;

    fn create_element(&self, tag: &str, classes: &[&str]) -> Result<Element> {
        let element = self.document.create_element(tag)?;
        for class in classes {
            element.class_list().add_1(class)?;
        }
        Ok(element)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<()> {
        element.set_attribute(name, value)?;
        Ok(())
    }

    fn remove_attribute(&self, element: &Element, name: &str) -> Result<()> {
        element.remove_attribute(name)?;
        Ok(())
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<()> {
        parent.append_child(child)?;
        Ok(())
    }

    fn append_to_body(&self, element: &Element) -> Result<()> {
        let body = self.document.body().ok_or(WiperError::NoBody)?;
        body.append_child(element)?;
        Ok(())
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        // live collection; copy it out before restyling
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn resource_url(&self, path: &str) -> String {
        resource_url(path)
    }
}
