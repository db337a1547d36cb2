//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the storefront: durable preferences
//! (`localStorage`), session values (`sessionStorage`), page element lookup (`document`), and
//! one-shot timers (`setTimeout`). On non-WASM targets every adapter degrades to an empty,
//! successful no-op so host-side tests and tooling still build.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod dom;
pub mod scheduler;
pub mod storage;

pub use adapters::{
    host_strategy_name, page_dom, prefs_store, selected_host_strategy, session_store,
    task_scheduler, HostStrategy, PrefsStoreAdapter, SessionStoreAdapter,
};
pub use dom::WebPageDom;
pub use scheduler::WebTaskScheduler;
pub use storage::local_prefs::WebPrefsStore;
pub use storage::session_storage::WebSessionStore;
