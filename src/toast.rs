//! Toast Notifications
//!
//! One toast per page. `ToastState` is the plain state machine; `Toaster` owns
//! it in a signal together with the auto-hide timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::error::ApiError;
use crate::models::ToastKind;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    /// Remaining lifetime when shown, `None` for persistent or hidden toasts
    pub auto_hide_ms: Option<u32>,
    /// Bumped on every show; a timer only hides the toast it was started for
    generation: u64,
}

impl ToastState {
    /// Replace the current toast. Returns the generation to arm a timer
    /// with, or `None` when the toast is persistent.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> Option<u64> {
        self.generation += 1;
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        self.auto_hide_ms = (duration_ms > 0).then_some(duration_ms);
        self.auto_hide_ms.map(|_| self.generation)
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.auto_hide_ms = None;
    }

    /// Timer callback; ignored if another toast replaced this one
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.hide();
        true
    }

    pub fn class(&self) -> String {
        if self.visible {
            format!("toast toast-{} show", self.kind.as_str())
        } else {
            "toast".to_string()
        }
    }
}

/// Page-wide toast controller, provided through context
#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
            timer: StoredValue::new_local(None),
        }
    }

    pub fn state(&self) -> Signal<ToastState> {
        self.state.into()
    }

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
        self.cancel_timer();
        let mut armed = None;
        self.state.update(|s| armed = s.show(message, kind, duration_ms));
        if let Some(generation) = armed {
            let state = self.state;
            let timeout = Timeout::new(duration_ms, move || {
                state.update(|s| {
                    s.expire(generation);
                });
            });
            self.timer.set_value(Some(timeout));
        }
    }

    pub fn hide(&self) {
        self.cancel_timer();
        if self.state.with_untracked(|s| s.visible) {
            self.state.update(ToastState::hide);
        }
    }

    fn cancel_timer(&self) {
        self.timer.update_value(|t| {
            if let Some(timeout) = t.take() {
                timeout.cancel();
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Success, TOAST_DURATION_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Error, TOAST_DURATION_MS);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Info, TOAST_DURATION_MS);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(message, ToastKind::Warning, TOAST_DURATION_MS);
    }

    /// Toast that stays until hidden
    pub fn persistent(&self, message: impl Into<String>, kind: ToastKind) {
        self.notify(message, kind, 0);
    }

    /// Log the failure and show `generic` (or the server's own message)
    pub fn api_error(&self, err: &ApiError, generic: &str) {
        self.error(err.report(generic));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_notify_replaces_first() {
        let mut state = ToastState::default();
        let first = state.show("Saved", ToastKind::Success, 6000).unwrap();
        let second = state.show("Failed", ToastKind::Error, 6000).unwrap();

        assert!(state.visible);
        assert_eq!(state.message, "Failed");
        assert_eq!(state.kind, ToastKind::Error);

        // The first toast's timer no longer applies
        assert!(!state.expire(first));
        assert!(state.visible);
        assert!(state.expire(second));
        assert!(!state.visible);
    }

    #[test]
    fn test_persistent_toast_has_no_timer() {
        let mut state = ToastState::default();
        assert_eq!(state.show("Saved", ToastKind::Success, 0), None);
        assert!(state.visible);
        assert_eq!(state.auto_hide_ms, None);

        state.hide();
        assert!(!state.visible);
        assert_eq!(state.auto_hide_ms, None);
    }

    #[test]
    fn test_hide_is_idempotent() {
        let mut state = ToastState::default();
        state.show("Saved", ToastKind::Info, 100);
        state.hide();
        let snapshot = state.clone();
        state.hide();
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_expire_after_hide_is_noop() {
        let mut state = ToastState::default();
        let generation = state.show("Saved", ToastKind::Info, 100).unwrap();
        state.hide();
        assert!(!state.expire(generation));
    }

    #[test]
    fn test_no_timer_survives_notify_then_hide() {
        let mut state = ToastState::default();
        let timed = state.show("Saving", ToastKind::Info, 6000).unwrap();
        assert_eq!(state.show("Saved", ToastKind::Success, 0), None);
        state.hide();

        // Neither the replaced toast's timer nor a late one can act
        assert!(!state.expire(timed));
        assert!(!state.visible);
        assert_eq!(state.auto_hide_ms, None);

        // A later toast is armed afresh
        let next = state.show("Again", ToastKind::Info, 6000).unwrap();
        assert!(!state.expire(timed));
        assert!(state.expire(next));
    }

    #[test]
    fn test_class_reflects_kind() {
        let mut state = ToastState::default();
        assert_eq!(state.class(), "toast");
        state.show("Careful", ToastKind::Warning, 10);
        assert_eq!(state.class(), "toast toast-warning show");
    }
}
