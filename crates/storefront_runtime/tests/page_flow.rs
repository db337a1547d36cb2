use platform_host::PrefsStore;
use storefront_runtime::{
    MemoryStorefrontHost, QuickViewPayload, Storefront, StorefrontConfig, ThemePreference,
};

const PAGE_IDS: [&str; 7] = [
    "qv-img",
    "qv-name",
    "qv-price",
    "quickView",
    "offerPopup",
    "wish-11",
    "wish-12",
];

fn load_page(page: &MemoryStorefrontHost) -> Storefront {
    let storefront =
        Storefront::new(page.context(), StorefrontConfig::default()).expect("storefront");
    storefront.boot();
    storefront
}

#[test]
fn shopper_session_across_two_page_loads() {
    let page = MemoryStorefrontHost::with_elements(PAGE_IDS);

    let first = load_page(&page);
    assert!(!page.dom.root_state().has_class("dark"));

    assert_eq!(first.toggle_theme().expect("theme"), ThemePreference::Dark);
    assert!(first.toggle_wishlist("11").expect("wishlist").listed);
    assert!(first.open_quick_view(&QuickViewPayload::new("Silk Scarf", 499.0, "/img/scarf.jpg")));
    assert_eq!(
        page.dom
            .element_state("qv-price")
            .expect("price")
            .text
            .as_deref(),
        Some("₹499")
    );
    assert!(first.close_quick_view());

    page.scheduler.advance_by(1500);
    let popup = page.dom.element_state("offerPopup").expect("popup");
    assert_eq!(
        popup.style.get("display").map(String::as_str),
        Some("block")
    );
    drop(first);

    // Navigating within the session: theme and wishlist persist, popup does not re-arm.
    let reloaded = MemoryStorefrontHost {
        dom: platform_host::MemoryPageDom::with_elements(PAGE_IDS),
        ..page.clone()
    };
    let second = load_page(&reloaded);
    assert!(reloaded.dom.root_state().has_class("dark"));
    assert!(reloaded
        .dom
        .element_state("wish-11")
        .expect("indicator")
        .has_class("active"));
    assert_eq!(reloaded.scheduler.pending_count(), 0);
    assert_eq!(second.wishlist().iter().collect::<Vec<_>>(), vec!["11"]);
}

#[test]
fn malformed_wishlist_from_older_page_is_replaced() {
    let page = MemoryStorefrontHost::with_elements(PAGE_IDS);
    page.prefs
        .save_pref("wishlist", "[\"11\"")
        .expect("seed truncated json");
    let storefront = load_page(&page);

    let outcome = storefront.toggle_wishlist("12").expect("toggle");
    assert!(outcome.listed);
    assert!(outcome.indicator_updated);
    assert_eq!(page.prefs.raw("wishlist").as_deref(), Some(r#"["12"]"#));
}

#[test]
fn custom_markup_names_are_honoured() {
    let config: StorefrontConfig = serde_json::from_str(
        r#"{"quickViewId": "product-modal", "quickViewVisibleClass": "is-open", "currencyPrefix": "Rs."}"#,
    )
    .expect("config");
    let page = MemoryStorefrontHost::with_elements(["product-modal", "qv-price"]);
    let storefront = Storefront::new(page.context(), config).expect("storefront");

    assert!(storefront.open_quick_view(&QuickViewPayload::new("Niqab", 350.0, "/n.jpg")));
    assert!(page
        .dom
        .element_state("product-modal")
        .expect("modal")
        .has_class("is-open"));
    assert_eq!(
        page.dom
            .element_state("qv-price")
            .expect("price")
            .text
            .as_deref(),
        Some("Rs.350")
    );
}
