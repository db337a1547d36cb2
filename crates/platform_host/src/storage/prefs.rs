//! Durable preference storage contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for durable preference values (raw text stored per key).
///
/// Values survive across browsing sessions. Calls are synchronous because the browser storage
/// APIs backing this contract are synchronous on the page thread.
pub trait PrefsStore {
    /// Loads the raw text stored for a preference key.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves raw text for a preference key, replacing any previous value.
    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String>;

    /// Deletes a preference key.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, so a test can keep one handle for inspection while the
/// runtime owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::default();
        store.inner.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        store
    }

    /// Returns the raw value currently stored for `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a JSON preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes a value to JSON and saves it through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw)
}
