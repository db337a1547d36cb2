//! Quick view product modal.

use crate::{
    config::StorefrontConfig, host::StorefrontHostContext, model::QuickViewPayload,
    pricing::format_price,
};

/// Writes `payload` into the modal fields and shows the overlay.
///
/// Fields missing from the page are skipped. Returns whether the overlay element exists.
pub fn open_quick_view(
    host: &StorefrontHostContext,
    config: &StorefrontConfig,
    payload: &QuickViewPayload,
) -> bool {
    let dom = host.page_dom();

    if let Some(image) = dom.element_by_id(&config.quick_view_image_id) {
        image.set_attribute("src", &payload.image_ref);
    }
    if let Some(name) = dom.element_by_id(&config.quick_view_name_id) {
        name.set_text(&payload.name);
    }
    if let Some(price) = dom.element_by_id(&config.quick_view_price_id) {
        price.set_text(&format_price(&config.currency_prefix, payload.price));
    }

    match dom.element_by_id(&config.quick_view_id) {
        Some(overlay) => {
            overlay.add_class(&config.quick_view_visible_class);
            true
        }
        None => false,
    }
}

/// Hides the overlay. Returns whether the overlay element exists.
pub fn close_quick_view(host: &StorefrontHostContext, config: &StorefrontConfig) -> bool {
    match host.page_dom().element_by_id(&config.quick_view_id) {
        Some(overlay) => {
            overlay.remove_class(&config.quick_view_visible_class);
            true
        }
        None => false,
    }
}
