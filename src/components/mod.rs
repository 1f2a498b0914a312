//! UI Components
//!
//! Reusable Leptos components.

mod toast_host;
mod modal_frame;
mod confirm_dialog;
mod filter_bar;
mod char_counter;
mod tab_bar;
mod item_action_dialog;

pub use toast_host::ToastHost;
pub use modal_frame::ModalFrame;
pub use confirm_dialog::ConfirmDialog;
pub use filter_bar::{FilterBar, FilterCount};
pub use char_counter::CharCounter;
pub use tab_bar::{TabBar, TabPanel};
pub use item_action_dialog::{ItemActionDialog, PendingItemAction};
