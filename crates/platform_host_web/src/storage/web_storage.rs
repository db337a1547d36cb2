//! Shared `web_sys::Storage` access for the local and session storage adapters.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            Self::Local => window.local_storage().ok().flatten(),
            Self::Session => window.session_storage().ok().flatten(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn require(self) -> Result<web_sys::Storage, String> {
        self.storage()
            .ok_or_else(|| format!("{} unavailable", self.label()))
    }
}

pub(crate) fn get_item(area: StorageArea, key: &str) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        area.require()?
            .get_item(key)
            .map_err(|e| format!("{} get_item failed: {e:?}", area.label()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (area, key);
        Ok(None)
    }
}

pub(crate) fn set_item(area: StorageArea, key: &str, raw: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        area.require()?
            .set_item(key, raw)
            .map_err(|e| format!("{} set_item failed: {e:?}", area.label()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (area, key, raw);
        Ok(())
    }
}

pub(crate) fn remove_item(area: StorageArea, key: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        area.require()?
            .remove_item(key)
            .map_err(|e| format!("{} remove_item failed: {e:?}", area.label()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (area, key);
        Ok(())
    }
}
