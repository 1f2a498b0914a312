//! Modal Controller
//!
//! Visibility and pending payload of a confirmation dialog. Every way of
//! dismissing a modal (close button, overlay click, Escape, end of a confirm)
//! goes through `close`, which forgets the payload.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::toast::Toaster;

#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<T> {
    visible: bool,
    pending: Option<T>,
    submitting: bool,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self { visible: false, pending: None, submitting: false }
    }
}

impl<T: Clone> ModalState<T> {
    pub fn open(&mut self, payload: T) {
        self.visible = true;
        self.pending = Some(payload);
        self.submitting = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.pending = None;
        self.submitting = false;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Start a confirmation: hands out the stored payload once.
    /// `None` when nothing is pending or a confirmation is already running.
    pub fn begin_confirm(&mut self) -> Option<T> {
        if !self.visible || self.submitting {
            return None;
        }
        let payload = self.pending.clone()?;
        self.submitting = true;
        Some(payload)
    }
}

/// What a confirmed action reports back
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing to say (page reload or silent update follows)
    Silent,
    Success(String),
}

/// Result of a confirmed action; the error is the text for the error toast
pub type ActionResult = Result<Outcome, String>;

/// Reactive handle around a `ModalState`
pub struct ModalController<T: Send + Sync + 'static> {
    state: RwSignal<ModalState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ModalController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ModalController<T> {}

impl<T: Clone + Send + Sync + 'static> ModalController<T> {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ModalState::default()) }
    }

    pub fn open(&self, payload: T) {
        self.state.update(|s| s.open(payload));
    }

    pub fn close(&self) {
        self.state.update(ModalState::close);
    }

    pub fn is_open(&self) -> bool {
        self.state.with(ModalState::is_open)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(ModalState::is_submitting)
    }

    pub fn pending(&self) -> Option<T> {
        self.state.with(|s| s.pending().cloned())
    }

    /// Run `action` with the stored payload, close the modal whatever the
    /// result, then show the result toast.
    pub fn confirm<F, Fut>(&self, toaster: Toaster, action: F)
    where
        F: FnOnce(T) -> Fut + 'static,
        Fut: Future<Output = ActionResult> + 'static,
    {
        let mut payload = None;
        self.state.update(|s| payload = s.begin_confirm());
        let Some(payload) = payload else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = action(payload).await;
            state.update(ModalState::close);
            match result {
                Ok(Outcome::Silent) => {}
                Ok(Outcome::Success(message)) => toaster.success(message),
                Err(message) => toaster.error(message),
            }
        });
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ModalController<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_forgets_payload() {
        let mut state = ModalState::default();
        state.open(42u64);
        assert!(state.is_open());
        assert_eq!(state.pending(), Some(&42));

        state.close();
        assert!(!state.is_open());
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn test_begin_confirm_hands_out_payload_once() {
        let mut state = ModalState::default();
        state.open("event-7".to_string());
        assert_eq!(state.begin_confirm(), Some("event-7".to_string()));
        assert!(state.is_submitting());
        assert_eq!(state.begin_confirm(), None);

        state.close();
        assert!(!state.is_submitting());
        assert_eq!(state.begin_confirm(), None);
    }

    #[test]
    fn test_reopen_replaces_payload() {
        let mut state = ModalState::default();
        state.open(1u64);
        state.open(2u64);
        assert_eq!(state.pending(), Some(&2));
    }

    #[test]
    fn test_confirm_requires_open_modal() {
        let mut state: ModalState<u64> = ModalState::default();
        assert_eq!(state.begin_confirm(), None);
    }
}
