//! Self-cancelling delayed callbacks.
//!
//! DESIGN
//! ======
//! Each `schedule` takes a fresh ticket; the callback only runs if its ticket
//! is still the newest when the delay elapses. Scheduling again therefore
//! cancels whatever was outstanding without holding a JS timer handle, which
//! keeps the type `Send + Sync` for Leptos closures.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and return a new one.
    pub fn arm(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Drop the outstanding callback, if any.
    pub fn cancel(&self) {
        self.arm();
    }

    /// Run `f` after `delay_ms` unless rescheduled or cancelled first.
    /// Browser-only; the server never fires timers.
    pub fn schedule(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        let ticket = self.arm();
        #[cfg(feature = "hydrate")]
        {
            let this = self.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
                if this.is_current(ticket) {
                    f();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, delay_ms, f);
        }
    }
}

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}
