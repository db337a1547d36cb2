//! Typed host-domain contracts shared by the storefront runtime and browser adapters.
//!
//! This crate is the API-first boundary for page services. It exposes the durable preference
//! store, the session store, page DOM access, and one-shot task scheduling as object-safe traits,
//! together with in-memory and no-op implementations. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use dom::{
    MemoryElementState, MemoryPageDom, NoopPageDom, PageDom, PageElement, PageElementHandle,
};
pub use scheduler::{DeferredTask, ManualScheduler, NoopScheduler, ScheduledTask, TaskScheduler};
pub use session::{MemorySessionStore, NoopSessionStore, SessionStore};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
};
