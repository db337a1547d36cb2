//! Session-scoped storage contracts and in-memory primitives.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for values scoped to one browsing session.
///
/// Values are cleared by the host when the session ends. The contract mirrors [`PrefsStore`]
/// but is kept separate so callers cannot mix up durable and session keys.
///
/// [`PrefsStore`]: crate::PrefsStore
pub trait SessionStore {
    /// Loads the raw text stored for a session key.
    fn load_value(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves raw text for a session key.
    fn save_value(&self, key: &str, raw: &str) -> Result<(), String>;

    /// Removes a session key.
    fn remove_value(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op session store for unsupported targets.
pub struct NoopSessionStore;

impl SessionStore for NoopSessionStore {
    fn load_value(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_value(&self, _key: &str, _raw: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove_value(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory session-scoped key/value store.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Reads a raw value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Stores a raw value by key.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), value.into());
    }

    /// Drops every value, as the host does when a session ends.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn load_value(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.get(key))
    }

    fn save_value(&self, key: &str, raw: &str) -> Result<(), String> {
        self.set(key, raw);
        Ok(())
    }

    fn remove_value(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}
