//! Timing Helpers
//!
//! Debounced callbacks and a guard against double submission. Each keeps its
//! bookkeeping in a plain state type; the wrappers only add the timers.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Ticket bookkeeping of a debouncer: only the newest ticket may fire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebounceState {
    issued: u64,
    pending: Option<u64>,
}

impl DebounceState {
    /// Supersede any pending call and hand out the ticket for the new one
    pub fn schedule(&mut self) -> u64 {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.issued
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Timer callback; true (once) when `ticket` is still the pending call
    pub fn fire(&mut self, ticket: u64) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Runs the latest scheduled callback once input has been quiet for `delay_ms`
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    state: StoredValue<DebounceState>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            state: StoredValue::new(DebounceState::default()),
            timer: StoredValue::new_local(None),
        }
    }

    /// Schedule `f`, dropping whatever was scheduled before
    pub fn call(&self, f: impl FnOnce() + 'static) {
        self.cancel_timer();
        let mut ticket = 0;
        self.state.update_value(|s| ticket = s.schedule());
        let state = self.state;
        let timeout = Timeout::new(self.delay_ms, move || {
            let mut due = false;
            state.update_value(|s| due = s.fire(ticket));
            if due {
                f();
            }
        });
        self.timer.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.cancel_timer();
        self.state.update_value(DebounceState::cancel);
    }

    fn cancel_timer(&self) {
        self.timer.update_value(|t| {
            if let Some(previous) = t.take() {
                previous.cancel();
            }
        });
    }
}

/// Busy flag of an action guard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardState {
    busy: bool,
}

impl GuardState {
    /// Claim the guard; false while a previous run is inside its window
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// End of the window
    pub fn release(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

/// Disables an action for a fixed window after it fires
#[derive(Clone, Copy)]
pub struct ActionGuard {
    state: RwSignal<GuardState>,
    window_ms: u32,
}

impl ActionGuard {
    pub fn new(window_ms: u32) -> Self {
        Self {
            state: RwSignal::new(GuardState::default()),
            window_ms,
        }
    }

    /// Bind to a button's `disabled` attribute
    pub fn is_busy(&self) -> bool {
        self.state.with(GuardState::is_busy)
    }

    /// Run `f` unless a previous run is still inside its window.
    /// Returns whether `f` ran.
    pub fn run(&self, f: impl FnOnce()) -> bool {
        let mut claimed = false;
        self.state.update(|s| claimed = s.try_begin());
        if !claimed {
            return false;
        }
        f();
        let state = self.state;
        Timeout::new(self.window_ms, move || state.update(GuardState::release)).forget();
        true
    }
}

/// Run `f` once after `ms`
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_call_supersedes_pending_ticket() {
        let mut state = DebounceState::default();
        let first = state.schedule();
        let second = state.schedule();

        assert!(!state.fire(first));
        assert!(state.is_pending());
        assert!(state.fire(second));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut state = DebounceState::default();
        let ticket = state.schedule();
        assert!(state.fire(ticket));
        assert!(!state.fire(ticket));
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let mut state = DebounceState::default();
        let ticket = state.schedule();
        state.cancel();
        assert!(!state.fire(ticket));

        // A later call is unaffected
        let next = state.schedule();
        assert!(state.fire(next));
    }

    #[test]
    fn test_busy_guard_refuses_second_run() {
        let mut guard = GuardState::default();
        assert!(guard.try_begin());
        assert!(guard.is_busy());
        assert!(!guard.try_begin());

        guard.release();
        assert!(!guard.is_busy());
        assert!(guard.try_begin());
    }
}
