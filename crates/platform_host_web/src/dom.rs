//! `document`-backed page DOM adapter.

use platform_host::{PageDom, PageElementHandle};

#[derive(Debug, Clone, Copy, Default)]
/// Page DOM adapter backed by `window.document`.
///
/// On non-WASM targets there is no document, so every lookup returns `None`.
pub struct WebPageDom;

impl PageDom for WebPageDom {
    fn root_element(&self) -> Option<PageElementHandle> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let element = document.document_element()?;
            Some(Box::new(web::WebElement::new(element)))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn element_by_id(&self, id: &str) -> Option<PageElementHandle> {
        #[cfg(target_arch = "wasm32")]
        {
            let document = web_sys::window()?.document()?;
            let element = document.get_element_by_id(id)?;
            Some(Box::new(web::WebElement::new(element)))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = id;
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use platform_host::PageElement;
    use wasm_bindgen::JsCast;

    pub(super) struct WebElement {
        element: web_sys::Element,
    }

    impl WebElement {
        pub(super) fn new(element: web_sys::Element) -> Self {
            Self { element }
        }
    }

    // DOM exceptions here only arise from invalid class tokens or property names, which the
    // storefront never passes, so results are dropped.
    impl PageElement for WebElement {
        fn has_class(&self, class: &str) -> bool {
            self.element.class_list().contains(class)
        }

        fn add_class(&self, class: &str) {
            let _ = self.element.class_list().add_1(class);
        }

        fn remove_class(&self, class: &str) {
            let _ = self.element.class_list().remove_1(class);
        }

        fn toggle_class(&self, class: &str) -> bool {
            self.element
                .class_list()
                .toggle(class)
                .unwrap_or_else(|_| self.has_class(class))
        }

        fn set_text(&self, text: &str) {
            match self.element.dyn_ref::<web_sys::HtmlElement>() {
                Some(html) => html.set_inner_text(text),
                None => self.element.set_text_content(Some(text)),
            }
        }

        fn set_attribute(&self, name: &str, value: &str) {
            let _ = self.element.set_attribute(name, value);
        }

        fn set_style(&self, property: &str, value: &str) {
            if let Some(html) = self.element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.style().set_property(property, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_page_dom_non_wasm_has_no_elements() {
        assert!(WebPageDom.root_element().is_none());
        assert!(WebPageDom.element_by_id("quickView").is_none());
    }
}
