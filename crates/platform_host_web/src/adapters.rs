use platform_host::{MemoryPrefsStore, MemorySessionStore, PrefsStore, SessionStore};

use crate::{WebPageDom, WebPrefsStore, WebSessionStore, WebTaskScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected storage strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser `localStorage` / `sessionStorage`.
    Browser,
    /// Page-lifetime in-memory storage, for hosts where browser storage is blocked.
    MemoryStorage,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-memory-storage")]
    {
        HostStrategy::MemoryStorage
    }

    #[cfg(not(feature = "host-memory-storage"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::MemoryStorage => "memory-storage",
    }
}

/// Adapter enum that erases the concrete durable preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// In-memory preferences that last for the page lifetime.
    Memory(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Memory(store) => store.load_pref(key),
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw),
            Self::Memory(store) => store.save_pref(key, raw),
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Memory(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete session backend behind [`SessionStore`].
#[derive(Debug, Clone)]
pub enum SessionStoreAdapter {
    /// Browser `sessionStorage`.
    Browser(WebSessionStore),
    /// In-memory session values that last for the page lifetime.
    Memory(MemorySessionStore),
}

impl SessionStore for SessionStoreAdapter {
    fn load_value(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_value(key),
            Self::Memory(store) => store.load_value(key),
        }
    }

    fn save_value(&self, key: &str, raw: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_value(key, raw),
            Self::Memory(store) => store.save_value(key, raw),
        }
    }

    fn remove_value(&self, key: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.remove_value(key),
            Self::Memory(store) => store.remove_value(key),
        }
    }
}

thread_local! {
    static PAGE_PREFS: MemoryPrefsStore = MemoryPrefsStore::default();
    static PAGE_SESSION: MemorySessionStore = MemorySessionStore::default();
}

/// Returns a handle to the page-lifetime in-memory preferences. All handles share one map.
fn page_memory_prefs() -> MemoryPrefsStore {
    PAGE_PREFS.with(MemoryPrefsStore::clone)
}

/// Returns a handle to the page-lifetime in-memory session values. All handles share one map.
fn page_memory_session() -> MemorySessionStore {
    PAGE_SESSION.with(MemorySessionStore::clone)
}

/// Builds the durable preference adapter for the compile-time selected host strategy.
///
/// Memory-backed adapters built on the same page share their values.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::MemoryStorage => PrefsStoreAdapter::Memory(page_memory_prefs()),
    }
}

/// Builds the session adapter for the compile-time selected host strategy.
///
/// Memory-backed adapters built on the same page share their values.
pub fn session_store() -> SessionStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => SessionStoreAdapter::Browser(WebSessionStore),
        HostStrategy::MemoryStorage => SessionStoreAdapter::Memory(page_memory_session()),
    }
}

/// Builds the page DOM adapter. The document is always the browser's.
pub fn page_dom() -> WebPageDom {
    WebPageDom
}

/// Builds the one-shot task scheduler. Timers are always the browser's.
pub fn task_scheduler() -> WebTaskScheduler {
    WebTaskScheduler
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        let expected = if cfg!(feature = "host-memory-storage") {
            "memory-storage"
        } else {
            "browser"
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn memory_adapters_delegate_to_inner_store() {
        let prefs = PrefsStoreAdapter::Memory(MemoryPrefsStore::default());
        prefs.save_pref("theme", "dark").expect("save pref");
        assert_eq!(
            prefs.load_pref("theme").expect("load pref"),
            Some("dark".to_string())
        );

        let session = SessionStoreAdapter::Memory(MemorySessionStore::default());
        session.save_value("offer", "true").expect("save session");
        session.remove_value("offer").expect("remove session");
        assert_eq!(session.load_value("offer").expect("load session"), None);
    }

    #[test]
    fn page_memory_stores_are_shared_between_handles() {
        page_memory_prefs()
            .save_pref("wishlist", r#"["7"]"#)
            .expect("save pref");
        page_memory_session()
            .save_value("offer", "true")
            .expect("save session");

        assert_eq!(
            page_memory_prefs().load_pref("wishlist").expect("load pref"),
            Some(r#"["7"]"#.to_string())
        );
        assert_eq!(
            page_memory_session().load_value("offer").expect("load session"),
            Some("true".to_string())
        );
    }

    #[cfg(feature = "host-memory-storage")]
    #[test]
    fn memory_strategy_factories_share_page_state() {
        prefs_store().save_pref("theme", "dark").expect("save pref");
        session_store()
            .save_value("offer", "true")
            .expect("save session");

        assert_eq!(
            prefs_store().load_pref("theme").expect("load pref"),
            Some("dark".to_string())
        );
        assert_eq!(
            session_store().load_value("offer").expect("load session"),
            Some("true".to_string())
        );
    }
}
