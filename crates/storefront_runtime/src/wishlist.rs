//! Client-local wishlist of product identifiers.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with};

use crate::{
    config::StorefrontConfig, error::StorefrontError, host::StorefrontHostContext,
    model::WishlistSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a wishlist toggle.
pub struct WishlistToggle {
    /// Whether the product is listed after the toggle.
    pub listed: bool,
    /// Whether the page had an indicator element for the product.
    pub indicator_updated: bool,
}

/// Reads the stored wishlist.
///
/// Absent, malformed, or unreadable data yields an empty set; the latter two are logged.
pub fn load_wishlist(host: &StorefrontHostContext, config: &StorefrontConfig) -> WishlistSet {
    let prefs = host.prefs_store();
    match load_pref_with::<_, WishlistSet>(&*prefs, &config.wishlist_key) {
        Ok(wishlist) => wishlist.unwrap_or_default(),
        Err(err) => {
            logging::warn!("wishlist load failed, starting empty: {err}");
            WishlistSet::default()
        }
    }
}

/// Adds `product_id` to the wishlist if absent or removes it if present, persists the result,
/// and updates the product's indicator element to match.
///
/// # Errors
///
/// Returns [`StorefrontError::DurableWrite`] when the wishlist cannot be saved; the indicator is
/// left untouched in that case.
pub fn toggle_wishlist(
    host: &StorefrontHostContext,
    config: &StorefrontConfig,
    product_id: &str,
) -> Result<WishlistToggle, StorefrontError> {
    let mut wishlist = load_wishlist(host, config);
    let listed = wishlist.toggle(product_id);

    let prefs = host.prefs_store();
    save_pref_with(&*prefs, &config.wishlist_key, &wishlist).map_err(|message| {
        StorefrontError::DurableWrite {
            key: config.wishlist_key.clone(),
            message,
        }
    })?;

    let indicator = host
        .page_dom()
        .element_by_id(&config.wishlist_element_id(product_id));
    let indicator_updated = match indicator {
        Some(element) => {
            element.set_class(&config.wishlist_active_class, listed);
            true
        }
        None => false,
    };

    Ok(WishlistToggle {
        listed,
        indicator_updated,
    })
}

/// Marks the indicator of every stored product as active. Returns how many indicators exist.
pub fn hydrate_wishlist_indicators(
    host: &StorefrontHostContext,
    config: &StorefrontConfig,
) -> usize {
    let dom = host.page_dom();
    let mut hydrated = 0;
    for id in load_wishlist(host, config).iter() {
        if let Some(element) = dom.element_by_id(&config.wishlist_element_id(id)) {
            element.add_class(&config.wishlist_active_class);
            hydrated += 1;
        }
    }
    hydrated
}
