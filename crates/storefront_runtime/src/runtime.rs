//! Page-lifetime storefront runtime tying the features to one host and configuration.

use std::cell::RefCell;

use platform_host::ScheduledTask;

use crate::{
    config::StorefrontConfig,
    error::StorefrontError,
    host::StorefrontHostContext,
    model::{QuickViewPayload, ThemePreference, WishlistSet},
    offer_popup, quick_view, theme,
    wishlist::{self, WishlistToggle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// What [`Storefront::boot`] did to the page.
pub struct BootReport {
    /// Host strategy the page booted against.
    pub host_strategy: &'static str,
    /// Whether the stored dark theme was applied to the document root.
    pub dark_theme_applied: bool,
    /// How many wishlist indicators were marked active.
    pub wishlist_indicators_hydrated: usize,
    /// Whether the offer popup timer was armed.
    pub offer_popup_armed: bool,
}

/// Storefront features bound to a host and configuration for the life of the page.
///
/// Owns the pending offer popup task, so dropping the runtime cancels a popup that has not
/// appeared yet.
pub struct Storefront {
    host: StorefrontHostContext,
    config: StorefrontConfig,
    offer_task: RefCell<Option<ScheduledTask>>,
}

impl Storefront {
    /// Creates a runtime after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidConfig`] when `config` is rejected.
    pub fn new(
        host: StorefrontHostContext,
        config: StorefrontConfig,
    ) -> Result<Self, StorefrontError> {
        config.validate()?;
        Ok(Self {
            host,
            config,
            offer_task: RefCell::new(None),
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Returns the host services.
    pub fn host(&self) -> &StorefrontHostContext {
        &self.host
    }

    /// Runs the page-load steps in order: stored theme, wishlist indicators, offer popup.
    ///
    /// Re-running replaces any still-pending popup task, so at most one is ever pending.
    pub fn boot(&self) -> BootReport {
        let dark_theme_applied = theme::apply_stored_theme(&self.host, &self.config);
        let wishlist_indicators_hydrated =
            wishlist::hydrate_wishlist_indicators(&self.host, &self.config);
        let task = offer_popup::arm_offer_popup(&self.host, &self.config);
        let offer_popup_armed = task.is_some();
        drop(self.offer_task.replace(task));

        BootReport {
            host_strategy: self.host.host_strategy_name(),
            dark_theme_applied,
            wishlist_indicators_hydrated,
            offer_popup_armed,
        }
    }

    /// Flips the theme and persists it. See [`theme::toggle_theme`].
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::DurableWrite`] when the preference cannot be saved.
    pub fn toggle_theme(&self) -> Result<ThemePreference, StorefrontError> {
        theme::toggle_theme(&self.host, &self.config)
    }

    /// Toggles a product's wishlist membership. See [`wishlist::toggle_wishlist`].
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::DurableWrite`] when the wishlist cannot be saved.
    pub fn toggle_wishlist(&self, product_id: &str) -> Result<WishlistToggle, StorefrontError> {
        wishlist::toggle_wishlist(&self.host, &self.config, product_id)
    }

    /// Returns the stored wishlist.
    pub fn wishlist(&self) -> WishlistSet {
        wishlist::load_wishlist(&self.host, &self.config)
    }

    /// Shows the quick view modal for `payload`.
    pub fn open_quick_view(&self, payload: &QuickViewPayload) -> bool {
        quick_view::open_quick_view(&self.host, &self.config, payload)
    }

    /// Hides the quick view modal.
    pub fn close_quick_view(&self) -> bool {
        quick_view::close_quick_view(&self.host, &self.config)
    }

    /// Cancels the offer popup if it has not appeared yet. Returns whether a task was held.
    pub fn cancel_offer_popup(&self) -> bool {
        match self.offer_task.borrow_mut().take() {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }

    /// Hides a displayed offer popup.
    pub fn dismiss_offer_popup(&self) -> bool {
        offer_popup::dismiss_offer_popup(&self.host, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use platform_host::PrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::host::MemoryStorefrontHost;

    #[test]
    fn new_rejects_invalid_config() {
        let config = StorefrontConfig {
            quick_view_id: String::new(),
            ..StorefrontConfig::default()
        };
        let err = Storefront::new(MemoryStorefrontHost::default().context(), config)
            .err()
            .expect("invalid config");
        assert!(matches!(err, StorefrontError::InvalidConfig(_)));
    }

    #[test]
    fn boot_applies_theme_hydrates_wishlist_and_arms_popup() {
        let page = MemoryStorefrontHost::with_elements(["wish-2", "offerPopup"]);
        page.prefs.save_pref("theme", "dark").expect("seed theme");
        page.prefs
            .save_pref("wishlist", r#"["2"]"#)
            .expect("seed wishlist");
        let storefront =
            Storefront::new(page.context(), StorefrontConfig::default()).expect("storefront");

        assert_eq!(
            storefront.boot(),
            BootReport {
                host_strategy: "memory",
                dark_theme_applied: true,
                wishlist_indicators_hydrated: 1,
                offer_popup_armed: true,
            }
        );
        assert!(page.dom.root_state().has_class("dark"));
        assert_eq!(page.scheduler.pending_count(), 1);
    }

    #[test]
    fn configured_delay_drives_the_popup_timer() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let config = StorefrontConfig {
            offer_delay_ms: 200,
            ..StorefrontConfig::default()
        };
        let storefront = Storefront::new(page.context(), config).expect("storefront");
        assert_eq!(storefront.config().offer_delay_ms, 200);
        assert_eq!(storefront.host().host_strategy_name(), "memory");

        storefront.boot();
        assert_eq!(page.scheduler.advance_by(199), 0);
        assert_eq!(page.scheduler.advance_by(1), 1);
        assert_eq!(page.session.get("offer").as_deref(), Some("true"));
    }

    #[test]
    fn reboot_keeps_a_single_pending_popup() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let storefront =
            Storefront::new(page.context(), StorefrontConfig::default()).expect("storefront");

        storefront.boot();
        storefront.boot();
        assert_eq!(page.scheduler.pending_count(), 1);
        assert_eq!(page.scheduler.advance_by(1500), 1);
    }

    #[test]
    fn cancel_offer_popup_prevents_display() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let storefront =
            Storefront::new(page.context(), StorefrontConfig::default()).expect("storefront");

        storefront.boot();
        assert!(storefront.cancel_offer_popup());
        assert!(!storefront.cancel_offer_popup());
        assert_eq!(page.scheduler.advance_by(1500), 0);
        assert_eq!(page.session.get("offer"), None);
    }

    #[test]
    fn dropping_runtime_cancels_pending_popup() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let storefront =
            Storefront::new(page.context(), StorefrontConfig::default()).expect("storefront");
        storefront.boot();
        drop(storefront);

        assert_eq!(page.scheduler.pending_count(), 0);
    }
}
