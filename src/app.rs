//! Inventory Frontend App
//!
//! Picks the page component for the server-rendered screen and hosts the
//! page-wide toast.

use leptos::prelude::*;

use crate::config::{PageConfig, PageKind, FLASH_DELAY_MS, TOAST_DURATION_MS};
use crate::components::ToastHost;
use crate::context::AppContext;
use crate::dom;
use crate::pages::{
    AdminMetricsPage, AuthPage, ChiefUsersPage, DashboardPage, EventDetailPage, ResponsibilityManagePage,
    ResponsibilityViewPage, UserInfoPage, UserItemsPage,
};
use crate::timing::after;
use crate::toast::Toaster;

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let kind = config.kind;
    let toaster = Toaster::new();

    // Provide context to all children
    provide_context(AppContext::new(config, toaster));

    // Toast carried over from before a reload
    if let Some((message, flash_kind)) = dom::take_flash() {
        after(FLASH_DELAY_MS, move || toaster.notify(message, flash_kind, TOAST_DURATION_MS));
    }
    // Redirect outcomes in the query string; the last one wins the toast
    for (message, flash_kind) in dom::query_flash() {
        toaster.notify(message, flash_kind, TOAST_DURATION_MS);
    }

    log::info!("mounting {:?} page", kind);

    let page = match kind {
        PageKind::UserItems => view! { <UserItemsPage /> }.into_any(),
        PageKind::ResponsibilityView => view! { <ResponsibilityViewPage /> }.into_any(),
        PageKind::ResponsibilityManage => view! { <ResponsibilityManagePage /> }.into_any(),
        PageKind::ChiefUsers => view! { <ChiefUsersPage /> }.into_any(),
        PageKind::EventDetail => view! { <EventDetailPage /> }.into_any(),
        PageKind::Dashboard => view! { <DashboardPage /> }.into_any(),
        PageKind::AdminMetrics => view! { <AdminMetricsPage /> }.into_any(),
        PageKind::Auth => view! { <AuthPage /> }.into_any(),
        PageKind::UserInfo => view! { <UserInfoPage /> }.into_any(),
    };

    view! {
        {page}
        <ToastHost toaster=toaster />
    }
}
