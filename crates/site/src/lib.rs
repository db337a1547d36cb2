//! WASM entrypoint loaded by the storefront page.
//!
//! The module start hook boots the storefront synchronously as soon as the module is
//! instantiated, so the stored theme is applied before any user interaction. The remaining
//! exports keep the names the page markup already calls from inline handlers
//! (`onclick="toggleWishlist(12)"`).

use std::cell::RefCell;

use leptos::logging;
use storefront_runtime::{
    number_text, BootReport, CartEstimate, CartLine, QuickViewPayload, Storefront,
    StorefrontConfig, StorefrontError, StorefrontHostContext,
};
use wasm_bindgen::prelude::*;

thread_local! {
    static STOREFRONT: RefCell<Option<Storefront>> = const { RefCell::new(None) };
}

fn with_storefront<R>(action: &str, f: impl FnOnce(&Storefront) -> R) -> Option<R> {
    let result = STOREFRONT.with(|cell| cell.borrow().as_ref().map(f));
    if result.is_none() {
        logging::warn!("{action} ignored: storefront is not initialized");
    }
    result
}

/// Builds a storefront on `host`, boots it, and makes it the active instance.
///
/// A previously active instance is dropped, cancelling its pending offer popup.
fn install(
    host: StorefrontHostContext,
    config: StorefrontConfig,
) -> Result<BootReport, StorefrontError> {
    let storefront = Storefront::new(host, config)?;
    let report = storefront.boot();
    STOREFRONT.with(|cell| drop(cell.replace(Some(storefront))));
    Ok(report)
}

/// Returns the active instance's host so a reconfigured storefront keeps the page's stores.
fn active_host() -> Option<StorefrontHostContext> {
    STOREFRONT.with(|cell| cell.borrow().as_ref().map(|storefront| storefront.host().clone()))
}

/// Normalizes a product id passed from page markup: text as-is, numbers as the browser prints
/// them (`12` → `"12"`).
fn product_id_text(text: Option<String>, number: Option<f64>) -> Option<String> {
    text.or_else(|| number.map(number_text))
}

/// Module start hook: installs the default configuration.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = install(StorefrontHostContext::default(), StorefrontConfig::default()) {
        logging::warn!("storefront boot failed: {err}");
    }
}

/// Re-creates the storefront from a (partial) configuration object, on the same host services as
/// the active instance.
///
/// # Errors
///
/// Rejects with a JS error when the object cannot be read or the configuration is invalid; the
/// previous instance stays active in that case.
#[wasm_bindgen(js_name = configureStorefront)]
pub fn configure_storefront(config: JsValue) -> Result<(), JsValue> {
    let config: StorefrontConfig = serde_wasm_bindgen::from_value(config)?;
    install(active_host().unwrap_or_default(), config)
        .map(|_| ())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Flips the dark/light theme.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    if let Some(Err(err)) = with_storefront("toggleTheme", Storefront::toggle_theme) {
        logging::warn!("{err}");
    }
}

/// Adds or removes a product from the wishlist. Accepts string or numeric ids.
#[wasm_bindgen(js_name = toggleWishlist)]
pub fn toggle_wishlist(id: JsValue) {
    let Some(id) = product_id_text(id.as_string(), id.as_f64()) else {
        logging::warn!("toggleWishlist ignored: product id must be a string or number");
        return;
    };
    if let Some(Err(err)) = with_storefront("toggleWishlist", |storefront| {
        storefront.toggle_wishlist(&id)
    }) {
        logging::warn!("{err}");
    }
}

/// Fills and shows the quick view modal.
#[wasm_bindgen(js_name = openQuickView)]
pub fn open_quick_view(name: String, price: f64, img: String) {
    let payload = QuickViewPayload::new(name, price, img);
    with_storefront("openQuickView", |storefront| {
        storefront.open_quick_view(&payload)
    });
}

/// Hides the quick view modal.
#[wasm_bindgen(js_name = closeQuickView)]
pub fn close_quick_view() {
    with_storefront("closeQuickView", Storefront::close_quick_view);
}

/// Hides the offer popup.
#[wasm_bindgen(js_name = dismissOfferPopup)]
pub fn dismiss_offer_popup() {
    with_storefront("dismissOfferPopup", Storefront::dismiss_offer_popup);
}

/// Computes subtotal, shipping, and total for `[{ price, quantity }]`.
///
/// # Errors
///
/// Rejects with a JS error when `lines` is not an array of cart lines.
#[wasm_bindgen(js_name = estimateCart)]
pub fn estimate_cart(lines: JsValue) -> Result<JsValue, JsValue> {
    let lines: Vec<CartLine> = serde_wasm_bindgen::from_value(lines)?;
    let estimate = CartEstimate::from_lines(&lines);
    Ok(serde_wasm_bindgen::to_value(&estimate)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use storefront_runtime::MemoryStorefrontHost;

    use super::*;

    #[test]
    fn invalid_config_keeps_previous_instance() {
        let page = MemoryStorefrontHost::with_elements(["quickView"]);
        install(page.context(), StorefrontConfig::default()).expect("install default");

        let rejected = install(
            page.context(),
            StorefrontConfig {
                quick_view_id: String::new(),
                ..StorefrontConfig::default()
            },
        );
        assert!(matches!(rejected, Err(StorefrontError::InvalidConfig(_))));

        close_quick_view();
        let opened = with_storefront("test", |storefront| {
            storefront.open_quick_view(&QuickViewPayload::new("Abaya", 1.0, "/a.jpg"))
        });
        assert_eq!(opened, Some(true));
    }

    #[test]
    fn numeric_product_ids_address_their_indicator() {
        assert_eq!(product_id_text(None, Some(12.0)), Some("12".to_string()));
        assert_eq!(product_id_text(None, Some(-0.0)), Some("0".to_string()));
        assert_eq!(product_id_text(None, Some(2.5)), Some("2.5".to_string()));
        assert_eq!(
            product_id_text(Some("scarf-1".to_string()), None),
            Some("scarf-1".to_string())
        );
        assert_eq!(product_id_text(None, None), None);

        let page = MemoryStorefrontHost::with_elements(["wish-12"]);
        install(page.context(), StorefrontConfig::default()).expect("install");
        let id = product_id_text(None, Some(12.0)).expect("numeric id");
        let toggled = with_storefront("toggleWishlist", |storefront| {
            storefront.toggle_wishlist(&id)
        })
        .expect("installed")
        .expect("toggle");

        assert!(toggled.indicator_updated);
        assert!(page
            .dom
            .element_state("wish-12")
            .expect("indicator")
            .has_class("active"));
        assert_eq!(page.prefs.raw("wishlist").as_deref(), Some(r#"["12"]"#));
    }

    #[test]
    fn reconfigure_keeps_session_flag_of_active_host() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        install(page.context(), StorefrontConfig::default()).expect("install");
        page.scheduler.advance_by(1500);
        assert_eq!(page.session.get("offer").as_deref(), Some("true"));

        let host = active_host().expect("active host");
        assert_eq!(host.host_strategy_name(), "memory");
        let config = StorefrontConfig {
            offer_delay_ms: 10,
            ..StorefrontConfig::default()
        };
        let report = install(host, config).expect("reconfigure");

        assert!(!report.offer_popup_armed);
        assert_eq!(page.scheduler.pending_count(), 0);
        assert_eq!(
            with_storefront("test", |storefront| storefront.config().offer_delay_ms),
            Some(10)
        );
    }

    #[test]
    fn reinstall_cancels_previous_pending_popup() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let report = install(page.context(), StorefrontConfig::default()).expect("first");
        assert!(report.offer_popup_armed);

        install(page.context(), StorefrontConfig::default()).expect("second");
        assert_eq!(page.scheduler.pending_count(), 1);
    }
}
