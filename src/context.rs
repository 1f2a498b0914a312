//! Application Context
//!
//! Page-wide values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{PageConfig, UserRole};
use crate::toast::Toaster;

/// Bootstrap config and toast controller shared by every island on the page
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<PageConfig>,
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(config: PageConfig, toaster: Toaster) -> Self {
        Self {
            config: StoredValue::new(config),
            toaster,
        }
    }

    pub fn role(&self) -> UserRole {
        self.config.with_value(|c| c.role)
    }

    pub fn event_id(&self) -> Option<u64> {
        self.config.with_value(|c| c.event_id)
    }

    pub fn responsibility_id(&self) -> Option<u64> {
        self.config.with_value(|c| c.responsibility_id)
    }

    /// Typed view of the page-data block
    pub fn page_data<T: serde::de::DeserializeOwned + Default>(&self) -> T {
        self.config.with_value(|c| c.page_data())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
