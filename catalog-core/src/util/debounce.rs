//!  src/util/debounce.rs
//!  ===================================================================
//!  Deadline-based Debounce / Delay utilities
//!
//!  • Single pending slot per debounced value: every submit replaces the
//!    value and pushes the deadline out, so only the last write survives
//!    the quiet window.
//!  • No background tasks. The owner passes `now` in and asks for the next
//!    deadline, which the event loop feeds to `tokio::time::sleep_until`.
//!  • Deterministic under test: time is just an argument.

use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

/* ======================== DebounceConfig ============================ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    pub delay: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::search_input()
    }
}

impl DebounceConfig {
    /// Quick config for search input debouncing
    #[must_use]
    pub const fn search_input() -> Self {
        Self {
            delay: Duration::from_millis(300),
        }
    }

    /// Quick config for closing-transition delays
    #[must_use]
    pub const fn overlay_dismiss() -> Self {
        Self {
            delay: Duration::from_millis(200),
        }
    }
}

/* ============================ Debouncer ============================ */

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds the latest submitted value until it has been quiet for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    cfg: DebounceConfig,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(cfg: DebounceConfig) -> Self {
        Self { cfg, pending: None }
    }

    /// Replace any pending value and reschedule its deadline.
    pub fn submit(&mut self, value: T, now: Instant) {
        let deadline = now + self.cfg.delay;
        if self.pending.is_some() {
            trace!("Debouncer rescheduled pending value");
        }
        self.pending = Some(Pending { value, deadline });
    }

    /// Take the pending value if its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without committing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/* ========================== DelayedAction =========================== */

/// One-shot timer slot: fires once after `delay`, rescheduling replaces it.
#[derive(Debug, Clone)]
pub struct DelayedAction {
    cfg: DebounceConfig,
    deadline: Option<Instant>,
}

impl DelayedAction {
    #[must_use]
    pub const fn new(cfg: DebounceConfig) -> Self {
        Self {
            cfg,
            deadline: None,
        }
    }

    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.cfg.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn only_last_value_survives_quiet_window() {
        let start = Instant::now();
        let mut deb = Debouncer::new(DebounceConfig::search_input());

        deb.submit("d", start);
        deb.submit("do", start + ms(100));
        deb.submit("dog", start + ms(250));

        assert_eq!(deb.poll(start + ms(400)), None);
        assert_eq!(deb.deadline(), Some(start + ms(550)));
        assert_eq!(deb.poll(start + ms(550)), Some("dog"));
        assert_eq!(deb.poll(start + ms(10_000)), None);
        assert!(!deb.is_pending());
    }

    #[test]
    fn flush_and_cancel_empty_the_slot() {
        let now = Instant::now();
        let mut deb = Debouncer::new(DebounceConfig::search_input());

        deb.submit(1, now);
        assert_eq!(deb.flush(), Some(1));
        assert_eq!(deb.flush(), None);

        deb.submit(2, now);
        deb.cancel();
        assert_eq!(deb.poll(now + ms(1_000)), None);
    }

    #[test]
    fn delayed_action_fires_once() {
        let now = Instant::now();
        let mut action = DelayedAction::new(DebounceConfig::overlay_dismiss());

        action.schedule(now);
        assert!(!action.poll(now + ms(199)));
        assert!(action.poll(now + ms(200)));
        assert!(!action.poll(now + ms(400)));

        action.schedule(now);
        action.cancel();
        assert_eq!(action.deadline(), None);
        assert!(!action.poll(now + ms(400)));
    }
}
