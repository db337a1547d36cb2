//! Dark/light theme toggle and page-load theme application.

use leptos::logging;

use crate::{
    config::StorefrontConfig, error::StorefrontError, host::StorefrontHostContext,
    model::ThemePreference,
};

/// Reads the stored theme preference. Unreadable storage is logged and treated as absent.
pub fn stored_theme(
    host: &StorefrontHostContext,
    config: &StorefrontConfig,
) -> Option<ThemePreference> {
    match host.prefs_store().load_pref(&config.theme_key) {
        Ok(raw) => raw.as_deref().and_then(ThemePreference::from_stored),
        Err(err) => {
            logging::warn!("theme preference load failed: {err}");
            None
        }
    }
}

/// Adds the dark marker to the document root when the stored preference is exactly `"dark"`.
///
/// Returns whether the marker was applied. Any other stored value, or none, leaves the page in
/// its default light styling.
pub fn apply_stored_theme(host: &StorefrontHostContext, config: &StorefrontConfig) -> bool {
    if stored_theme(host, config) != Some(ThemePreference::Dark) {
        return false;
    }
    let Some(root) = host.page_dom().root_element() else {
        return false;
    };
    root.add_class(&config.dark_class);
    true
}

/// Flips the dark marker on the document root and persists the resulting mode.
///
/// Without a root element the mode is flipped from the stored preference instead.
///
/// # Errors
///
/// Returns [`StorefrontError::DurableWrite`] when the preference cannot be saved. The marker has
/// already been flipped by then.
pub fn toggle_theme(
    host: &StorefrontHostContext,
    config: &StorefrontConfig,
) -> Result<ThemePreference, StorefrontError> {
    let next = match host.page_dom().root_element() {
        Some(root) => ThemePreference::from_dark(root.toggle_class(&config.dark_class)),
        None => stored_theme(host, config).unwrap_or_default().toggled(),
    };

    host.prefs_store()
        .save_pref(&config.theme_key, next.as_str())
        .map_err(|message| StorefrontError::DurableWrite {
            key: config.theme_key.clone(),
            message,
        })?;
    Ok(next)
}
