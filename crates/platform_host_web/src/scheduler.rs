//! `setTimeout`-backed one-shot task scheduler.

use platform_host::{DeferredTask, ScheduledTask, TaskScheduler};

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler backed by `window.setTimeout` / `window.clearTimeout`.
///
/// On non-WASM targets tasks are dropped without running.
pub struct WebTaskScheduler;

impl TaskScheduler for WebTaskScheduler {
    fn schedule_once(&self, delay_ms: u32, task: DeferredTask) -> ScheduledTask {
        #[cfg(target_arch = "wasm32")]
        {
            use std::{cell::RefCell, rc::Rc};

            use wasm_bindgen::{closure::Closure, JsCast};

            let Some(window) = web_sys::window() else {
                return ScheduledTask::inert();
            };
            let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            let callback: Closure<dyn FnMut()> = Closure::once(move || task());
            let handle = match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            ) {
                Ok(handle) => handle,
                Err(_) => return ScheduledTask::inert(),
            };

            // The handle owns the callback; it is freed on cancel and leaked only on detach.
            let owned = Rc::new(RefCell::new(Some(callback)));
            let released = owned.clone();
            ScheduledTask::new(move || {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(handle);
                }
                drop(owned.borrow_mut().take());
            })
            .on_detach(move || {
                if let Some(callback) = released.borrow_mut().take() {
                    callback.forget();
                }
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (delay_ms, task);
            ScheduledTask::inert()
        }
    }
}
