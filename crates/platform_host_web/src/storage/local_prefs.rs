//! `localStorage`-backed durable preference store.

use platform_host::PrefsStore;

use super::web_storage::{self, StorageArea};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
///
/// Values are stored as raw text, so keys written by other page scripts stay readable.
pub struct WebPrefsStore;

impl PrefsStore for WebPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        web_storage::get_item(StorageArea::Local, key)
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        web_storage::set_item(StorageArea::Local, key, raw)
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        web_storage::remove_item(StorageArea::Local, key)
    }
}
