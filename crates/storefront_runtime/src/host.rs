//! Host service bundle the storefront features run against.

use std::rc::Rc;

use platform_host::{
    ManualScheduler, MemoryPageDom, MemoryPrefsStore, MemorySessionStore, PageDom, PrefsStore,
    SessionStore, TaskScheduler,
};
use platform_host_web::{host_strategy_name, page_dom, prefs_store, session_store, task_scheduler};

#[derive(Clone)]
/// Injected page services: durable prefs, session values, DOM lookup, and one-shot timers.
pub struct StorefrontHostContext {
    prefs: Rc<dyn PrefsStore>,
    session: Rc<dyn SessionStore>,
    dom: Rc<dyn PageDom>,
    scheduler: Rc<dyn TaskScheduler>,
    host_strategy_name: &'static str,
}

impl Default for StorefrontHostContext {
    /// Wires the browser adapters selected at compile time.
    fn default() -> Self {
        Self {
            prefs: Rc::new(prefs_store()),
            session: Rc::new(session_store()),
            dom: Rc::new(page_dom()),
            scheduler: Rc::new(task_scheduler()),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl StorefrontHostContext {
    /// Builds a context from explicit service implementations.
    pub fn new(
        prefs: impl PrefsStore + 'static,
        session: impl SessionStore + 'static,
        dom: impl PageDom + 'static,
        scheduler: impl TaskScheduler + 'static,
    ) -> Self {
        Self {
            prefs: Rc::new(prefs),
            session: Rc::new(session),
            dom: Rc::new(dom),
            scheduler: Rc::new(scheduler),
            host_strategy_name: "custom",
        }
    }

    /// Returns the configured durable preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured session value service.
    pub fn session_store(&self) -> Rc<dyn SessionStore> {
        self.session.clone()
    }

    /// Returns the configured page DOM service.
    pub fn page_dom(&self) -> Rc<dyn PageDom> {
        self.dom.clone()
    }

    /// Returns the configured one-shot task scheduler.
    pub fn task_scheduler(&self) -> Rc<dyn TaskScheduler> {
        self.scheduler.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory host whose handles stay inspectable after a context is built from them.
pub struct MemoryStorefrontHost {
    /// Durable preferences.
    pub prefs: MemoryPrefsStore,
    /// Session values.
    pub session: MemorySessionStore,
    /// Page with a root element and declared ids.
    pub dom: MemoryPageDom,
    /// Virtual-time scheduler.
    pub scheduler: ManualScheduler,
}

impl MemoryStorefrontHost {
    /// Creates a host whose page declares every element id in `ids`.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dom: MemoryPageDom::with_elements(ids),
            ..Self::default()
        }
    }

    /// Builds a context sharing this host's stores, page, and clock.
    pub fn context(&self) -> StorefrontHostContext {
        StorefrontHostContext {
            host_strategy_name: "memory",
            ..StorefrontHostContext::new(
                self.prefs.clone(),
                self.session.clone(),
                self.dom.clone(),
                self.scheduler.clone(),
            )
        }
    }
}
