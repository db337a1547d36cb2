//! Storefront data model.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual theme mode persisted across sessions.
pub enum ThemePreference {
    /// Dark marker present on the document root.
    Dark,
    /// Default page styling.
    #[default]
    Light,
}

impl ThemePreference {
    /// Returns the stored text for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a stored value. Only the exact strings `"dark"` and `"light"` are recognized.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Maps presence of the dark marker to a mode.
    pub const fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// Insertion-ordered set of product identifiers.
///
/// Every mutation goes through methods that keep identifiers unique, so a decoded or mutated
/// wishlist can never hold duplicates.
pub struct WishlistSet {
    ids: Vec<String>,
}

impl WishlistSet {
    /// Returns whether `id` is listed.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|listed| listed == id)
    }

    /// Appends `id` unless already listed. Returns whether it was added.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`. Returns whether it was listed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|listed| listed != id);
        self.ids.len() != before
    }

    /// Symmetric-difference update with `{id}`. Returns whether `id` is listed afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        !self.remove(id) && self.insert(id)
    }

    /// Number of listed identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether nothing is listed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for WishlistSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredWishlistId {
    Text(String),
    Number(serde_json::Number),
}

impl From<StoredWishlistId> for String {
    fn from(id: StoredWishlistId) -> Self {
        match id {
            StoredWishlistId::Text(text) => text,
            StoredWishlistId::Number(number) => number.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for WishlistSet {
    /// Accepts a JSON array of strings or numbers; numbers become their decimal text and repeated
    /// ids keep their first position.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = Vec::<StoredWishlistId>::deserialize(deserializer)?;
        Ok(stored.into_iter().map(String::from).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Product details shown in the quick view modal. Built per call and not retained.
pub struct QuickViewPayload {
    /// Product display name.
    pub name: String,
    /// Unit price, rendered after the currency prefix.
    pub price: f64,
    /// Image URI or path.
    pub image_ref: String,
}

impl QuickViewPayload {
    /// Builds a payload from caller-supplied values.
    pub fn new(name: impl Into<String>, price: f64, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            image_ref: image_ref.into(),
        }
    }
}
