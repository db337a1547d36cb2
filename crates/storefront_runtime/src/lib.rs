//! Storefront page enhancements: theme toggle, wishlist, quick view modal, and offer popup.
//!
//! Every feature runs against a [`StorefrontHostContext`], a bundle of injected host services
//! (durable prefs, session values, page DOM, one-shot timers). The browser build wires the
//! `platform_host_web` adapters; tests wire [`MemoryStorefrontHost`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod host;
pub mod model;
pub mod offer_popup;
pub mod pricing;
pub mod quick_view;
pub mod runtime;
pub mod theme;
pub mod wishlist;

pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use host::{MemoryStorefrontHost, StorefrontHostContext};
pub use model::{QuickViewPayload, ThemePreference, WishlistSet};
pub use pricing::{format_price, number_text, shipping_for_quantity, CartEstimate, CartLine};
pub use runtime::{BootReport, Storefront};
pub use wishlist::WishlistToggle;
