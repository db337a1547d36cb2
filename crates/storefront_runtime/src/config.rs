//! Storefront page configuration: storage keys, element ids, marker classes, and timings.

use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// Default delay before the offer popup is shown, in milliseconds.
pub const DEFAULT_OFFER_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Names the page markup and storage layout the storefront binds to.
///
/// Deserializes from a partial object: any missing field takes its default.
pub struct StorefrontConfig {
    /// Durable key holding `"dark"` or `"light"`.
    pub theme_key: String,
    /// Durable key holding the JSON-encoded wishlist.
    pub wishlist_key: String,
    /// Session key set once the offer popup has been shown.
    pub offer_key: String,
    /// Class placed on the document root while the dark theme is active.
    pub dark_class: String,
    /// Prefix joined with a product id to form its wishlist indicator element id.
    pub wishlist_element_prefix: String,
    /// Class placed on a wishlist indicator while its product is listed.
    pub wishlist_active_class: String,
    /// Quick view image element id.
    pub quick_view_image_id: String,
    /// Quick view product name element id.
    pub quick_view_name_id: String,
    /// Quick view price element id.
    pub quick_view_price_id: String,
    /// Quick view overlay container id.
    pub quick_view_id: String,
    /// Class that makes the quick view overlay visible.
    pub quick_view_visible_class: String,
    /// Offer popup overlay container id.
    pub offer_popup_id: String,
    /// Delay before the offer popup is shown.
    pub offer_delay_ms: u32,
    /// Text placed before every rendered price.
    pub currency_prefix: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            theme_key: "theme".to_string(),
            wishlist_key: "wishlist".to_string(),
            offer_key: "offer".to_string(),
            dark_class: "dark".to_string(),
            wishlist_element_prefix: "wish-".to_string(),
            wishlist_active_class: "active".to_string(),
            quick_view_image_id: "qv-img".to_string(),
            quick_view_name_id: "qv-name".to_string(),
            quick_view_price_id: "qv-price".to_string(),
            quick_view_id: "quickView".to_string(),
            quick_view_visible_class: "show".to_string(),
            offer_popup_id: "offerPopup".to_string(),
            offer_delay_ms: DEFAULT_OFFER_DELAY_MS,
            currency_prefix: "\u{20B9}".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Returns the element id of the wishlist indicator for `product_id`.
    pub fn wishlist_element_id(&self, product_id: &str) -> String {
        format!("{}{product_id}", self.wishlist_element_prefix)
    }

    /// Checks that keys and ids are non-empty and class names are single tokens.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        let names = [
            ("themeKey", &self.theme_key),
            ("wishlistKey", &self.wishlist_key),
            ("offerKey", &self.offer_key),
            ("quickViewImageId", &self.quick_view_image_id),
            ("quickViewNameId", &self.quick_view_name_id),
            ("quickViewPriceId", &self.quick_view_price_id),
            ("quickViewId", &self.quick_view_id),
            ("offerPopupId", &self.offer_popup_id),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(StorefrontError::InvalidConfig(format!(
                    "`{field}` must not be empty"
                )));
            }
        }

        let classes = [
            ("darkClass", &self.dark_class),
            ("wishlistActiveClass", &self.wishlist_active_class),
            ("quickViewVisibleClass", &self.quick_view_visible_class),
        ];
        for (field, value) in classes {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(StorefrontError::InvalidConfig(format!(
                    "`{field}` must be a single class token, got `{value}`"
                )));
            }
        }

        Ok(())
    }
}
