//! `sessionStorage`-backed session store.

use platform_host::SessionStore;

use super::web_storage::{self, StorageArea};

#[derive(Debug, Clone, Copy, Default)]
/// Browser session store backed by `window.sessionStorage`.
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn load_value(&self, key: &str) -> Result<Option<String>, String> {
        web_storage::get_item(StorageArea::Session, key)
    }

    fn save_value(&self, key: &str, raw: &str) -> Result<(), String> {
        web_storage::set_item(StorageArea::Session, key, raw)
    }

    fn remove_value(&self, key: &str) -> Result<(), String> {
        web_storage::remove_item(StorageArea::Session, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_session_store_non_wasm_parity() {
        let store = WebSessionStore;
        store.save_value("offer", "true").expect("save");
        assert_eq!(store.load_value("offer").expect("load"), None);
        store.remove_value("offer").expect("remove");
    }
}
