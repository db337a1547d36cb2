//! Once-per-session promotional popup.

use leptos::logging;
use platform_host::ScheduledTask;

use crate::{config::StorefrontConfig, error::StorefrontError, host::StorefrontHostContext};

const SHOWN_FLAG_VALUE: &str = "true";

/// Returns whether the popup has already been shown this session.
///
/// Any non-empty stored value counts. An unreadable session store is logged and counts as shown,
/// so a broken store never shows the popup on every page.
pub fn offer_already_shown(host: &StorefrontHostContext, config: &StorefrontConfig) -> bool {
    match host.session_store().load_value(&config.offer_key) {
        Ok(value) => value.is_some_and(|value| !value.is_empty()),
        Err(err) => {
            logging::warn!("offer flag load failed: {err}");
            true
        }
    }
}

/// Schedules the popup to show after the configured delay unless it was already shown.
///
/// Returns `None` when nothing was scheduled. The returned handle owns the pending popup:
/// dropping it before the delay elapses cancels it.
pub fn arm_offer_popup(
    host: &StorefrontHostContext,
    config: &StorefrontConfig,
) -> Option<ScheduledTask> {
    if offer_already_shown(host, config) {
        return None;
    }

    let task_host = host.clone();
    let popup_id = config.offer_popup_id.clone();
    let offer_key = config.offer_key.clone();
    let task = host.task_scheduler().schedule_once(
        config.offer_delay_ms,
        Box::new(move || {
            if let Err(err) = show_offer_popup(&task_host, &popup_id, &offer_key) {
                logging::warn!("{err}");
            }
        }),
    );
    Some(task)
}

/// Displays the popup overlay, then records that it was shown this session.
///
/// Returns whether the overlay element exists. The flag is recorded either way.
///
/// # Errors
///
/// Returns [`StorefrontError::SessionWrite`] when the shown flag cannot be saved.
pub fn show_offer_popup(
    host: &StorefrontHostContext,
    popup_id: &str,
    offer_key: &str,
) -> Result<bool, StorefrontError> {
    let shown = match host.page_dom().element_by_id(popup_id) {
        Some(popup) => {
            popup.set_style("display", "block");
            true
        }
        None => false,
    };

    host.session_store()
        .save_value(offer_key, SHOWN_FLAG_VALUE)
        .map_err(|message| StorefrontError::SessionWrite {
            key: offer_key.to_string(),
            message,
        })?;
    Ok(shown)
}

/// Hides the popup overlay without clearing the session flag.
///
/// Returns whether the overlay element exists.
pub fn dismiss_offer_popup(host: &StorefrontHostContext, config: &StorefrontConfig) -> bool {
    match host.page_dom().element_by_id(&config.offer_popup_id) {
        Some(popup) => {
            popup.set_style("display", "none");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{NoopPageDom, NoopPrefsStore, SessionStore};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::host::MemoryStorefrontHost;

    fn popup_display(page: &MemoryStorefrontHost) -> Option<String> {
        page.dom
            .element_state("offerPopup")
            .and_then(|state| state.style.get("display").cloned())
    }

    #[test]
    fn popup_shows_after_delay_and_sets_flag() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let host = page.context();
        let config = StorefrontConfig::default();

        let task = arm_offer_popup(&host, &config).expect("armed");
        page.scheduler.advance_by(1499);
        assert_eq!(popup_display(&page), None);
        assert_eq!(page.session.get("offer"), None);

        page.scheduler.advance_by(1);
        assert_eq!(popup_display(&page).as_deref(), Some("block"));
        assert_eq!(page.session.get("offer").as_deref(), Some("true"));
        drop(task);
    }

    #[test]
    fn flag_already_set_never_arms_timer() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        page.session.set("offer", "true");

        assert!(arm_offer_popup(&page.context(), &StorefrontConfig::default()).is_none());
        assert_eq!(page.scheduler.pending_count(), 0);
        page.scheduler.advance_by(10_000);
        assert_eq!(popup_display(&page), None);
    }

    #[test]
    fn popup_appears_at_most_once_per_session() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let config = StorefrontConfig::default();

        let first = arm_offer_popup(&page.context(), &config);
        page.scheduler.advance_by(1500);
        assert!(first.is_some());

        // A second page load in the same session.
        assert!(arm_offer_popup(&page.context(), &config).is_none());

        // A new session re-arms.
        page.session.clear();
        assert!(arm_offer_popup(&page.context(), &config).is_some());
    }

    #[test]
    fn dropping_the_handle_cancels_the_popup() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        drop(arm_offer_popup(&page.context(), &StorefrontConfig::default()));

        page.scheduler.advance_by(5_000);
        assert_eq!(popup_display(&page), None);
        assert_eq!(page.session.get("offer"), None);
    }

    #[test]
    fn missing_popup_markup_still_records_flag() {
        let page = MemoryStorefrontHost::default();
        let shown = show_offer_popup(&page.context(), "offerPopup", "offer").expect("show");
        assert!(!shown);
        assert_eq!(page.session.get("offer").as_deref(), Some("true"));
    }

    #[test]
    fn unreadable_session_store_counts_as_shown() {
        struct BrokenSession;

        impl SessionStore for BrokenSession {
            fn load_value(&self, _key: &str) -> Result<Option<String>, String> {
                Err("sessionStorage unavailable".to_string())
            }

            fn save_value(&self, _key: &str, _raw: &str) -> Result<(), String> {
                Err("sessionStorage unavailable".to_string())
            }

            fn remove_value(&self, _key: &str) -> Result<(), String> {
                Ok(())
            }
        }

        let page = MemoryStorefrontHost::default();
        let host = StorefrontHostContext::new(
            NoopPrefsStore,
            BrokenSession,
            NoopPageDom,
            page.scheduler.clone(),
        );
        assert!(arm_offer_popup(&host, &StorefrontConfig::default()).is_none());
        assert_eq!(
            show_offer_popup(&host, "offerPopup", "offer"),
            Err(StorefrontError::SessionWrite {
                key: "offer".to_string(),
                message: "sessionStorage unavailable".to_string(),
            })
        );
    }

    #[test]
    fn dismiss_hides_without_clearing_flag() {
        let page = MemoryStorefrontHost::with_elements(["offerPopup"]);
        let host = page.context();
        let config = StorefrontConfig::default();

        show_offer_popup(&host, &config.offer_popup_id, &config.offer_key).expect("show");
        assert!(dismiss_offer_popup(&host, &config));
        assert_eq!(popup_display(&page).as_deref(), Some("none"));
        assert_eq!(page.session.get("offer").as_deref(), Some("true"));
    }
}
