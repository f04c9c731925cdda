//! Fixed-interval background work with an explicit disposer.
use gloo_timers::callback::Interval;
use leptos::logging::log;
use std::time::Duration;

/// A running poll. Dropping or cancelling it stops the timer.
#[must_use = "the poll stops as soon as its handle is dropped"]
pub struct PollHandle {
    interval: Option<Interval>,
    label: &'static str,
}

impl PollHandle {
    pub fn cancel(mut self) {
        self.stop();
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval);
            log!("[POLL] Stopped {}", self.label);
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn interval_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1)
}

/// Calls `tick` every `period` until the returned handle goes away. The
/// first call happens after one full period.
pub fn start_polling(
    label: &'static str,
    period: Duration,
    tick: impl FnMut() + 'static,
) -> PollHandle {
    let millis = interval_millis(period);
    log!("[POLL] Starting {} every {}ms", label, millis);
    PollHandle {
        interval: Some(Interval::new(millis, tick)),
        label,
    }
}
