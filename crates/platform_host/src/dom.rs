//! Page DOM access contracts.
//!
//! The storefront only ever needs to locate an element (the document root or an element by id)
//! and flip classes, text, attributes, or inline style on it. Lookups return `None` when the page
//! markup does not contain the element, and callers treat that as a no-op.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet, HashMap},
    rc::Rc,
};

/// Owned handle to a located page element.
pub type PageElementHandle = Box<dyn PageElement>;

/// Mutations the storefront applies to a located element.
pub trait PageElement {
    /// Returns whether the element carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Adds `class` to the element.
    fn add_class(&self, class: &str);

    /// Removes `class` from the element.
    fn remove_class(&self, class: &str);

    /// Flips `class` and returns whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    /// Adds or removes `class` so its presence equals `present`.
    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Replaces the rendered text of the element.
    fn set_text(&self, text: &str);

    /// Sets an attribute on the element.
    fn set_attribute(&self, name: &str, value: &str);

    /// Sets an inline style property on the element.
    fn set_style(&self, property: &str, value: &str);
}

/// Host service that locates page elements.
pub trait PageDom {
    /// Returns the document root element (`<html>` in a browser).
    fn root_element(&self) -> Option<PageElementHandle>;

    /// Returns the element with the given id, if the page contains one.
    fn element_by_id(&self, id: &str) -> Option<PageElementHandle>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Page DOM with no elements, for unsupported targets.
pub struct NoopPageDom;

impl PageDom for NoopPageDom {
    fn root_element(&self) -> Option<PageElementHandle> {
        None
    }

    fn element_by_id(&self, _id: &str) -> Option<PageElementHandle> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Observable state of an element in a [`MemoryPageDom`].
pub struct MemoryElementState {
    /// Classes currently on the element.
    pub classes: BTreeSet<String>,
    /// Text last written with [`PageElement::set_text`].
    pub text: Option<String>,
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Inline style properties by name.
    pub style: BTreeMap<String, String>,
}

impl MemoryElementState {
    /// Returns whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Default)]
struct MemoryDomState {
    root: MemoryElementState,
    elements: HashMap<String, MemoryElementState>,
}

#[derive(Debug, Clone, Default)]
/// In-memory page with a root element and a fixed set of id-addressable elements.
///
/// Elements must be declared with [`MemoryPageDom::insert_element`] (or
/// [`MemoryPageDom::with_elements`]) before lookups find them, matching a page whose markup either
/// contains an id or does not.
pub struct MemoryPageDom {
    inner: Rc<RefCell<MemoryDomState>>,
}

impl MemoryPageDom {
    /// Creates a page containing an empty element for every id in `ids`.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dom = Self::default();
        for id in ids {
            dom.insert_element(id);
        }
        dom
    }

    /// Adds an empty element with `id`, replacing any existing one.
    pub fn insert_element(&self, id: impl Into<String>) {
        self.inner
            .borrow_mut()
            .elements
            .insert(id.into(), MemoryElementState::default());
    }

    /// Returns a snapshot of the element with `id`.
    pub fn element_state(&self, id: &str) -> Option<MemoryElementState> {
        self.inner.borrow().elements.get(id).cloned()
    }

    /// Returns a snapshot of the root element.
    pub fn root_state(&self) -> MemoryElementState {
        self.inner.borrow().root.clone()
    }
}

impl PageDom for MemoryPageDom {
    fn root_element(&self) -> Option<PageElementHandle> {
        Some(Box::new(MemoryElement {
            dom: self.inner.clone(),
            target: ElementTarget::Root,
        }))
    }

    fn element_by_id(&self, id: &str) -> Option<PageElementHandle> {
        if !self.inner.borrow().elements.contains_key(id) {
            return None;
        }
        Some(Box::new(MemoryElement {
            dom: self.inner.clone(),
            target: ElementTarget::Id(id.to_string()),
        }))
    }
}

#[derive(Debug, Clone)]
enum ElementTarget {
    Root,
    Id(String),
}

#[derive(Debug)]
struct MemoryElement {
    dom: Rc<RefCell<MemoryDomState>>,
    target: ElementTarget,
}

impl MemoryElement {
    fn read<R>(&self, f: impl FnOnce(&MemoryElementState) -> R) -> Option<R> {
        let dom = self.dom.borrow();
        match &self.target {
            ElementTarget::Root => Some(f(&dom.root)),
            ElementTarget::Id(id) => dom.elements.get(id).map(f),
        }
    }

    fn write(&self, f: impl FnOnce(&mut MemoryElementState)) {
        let mut dom = self.dom.borrow_mut();
        match &self.target {
            ElementTarget::Root => f(&mut dom.root),
            ElementTarget::Id(id) => {
                if let Some(state) = dom.elements.get_mut(id) {
                    f(state);
                }
            }
        }
    }
}

impl PageElement for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.read(|state| state.has_class(class)).unwrap_or(false)
    }

    fn add_class(&self, class: &str) {
        self.write(|state| {
            state.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, class: &str) {
        self.write(|state| {
            state.classes.remove(class);
        });
    }

    fn set_text(&self, text: &str) {
        self.write(|state| state.text = Some(text.to_string()));
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.write(|state| {
            state
                .attributes
                .insert(name.to_string(), value.to_string());
        });
    }

    fn set_style(&self, property: &str, value: &str) {
        self.write(|state| {
            state.style.insert(property.to_string(), value.to_string());
        });
    }
}
