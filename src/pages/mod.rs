//! Pages
//!
//! One top-level component per server-rendered screen.

mod admin_metrics;
mod auth;
mod chief_users;
mod dashboard;
mod event_detail;
mod responsibility_manage;
mod responsibility_view;
mod user_info;
mod user_items;

pub use admin_metrics::AdminMetricsPage;
pub use auth::AuthPage;
pub use chief_users::ChiefUsersPage;
pub use dashboard::DashboardPage;
pub use event_detail::EventDetailPage;
pub use responsibility_manage::ResponsibilityManagePage;
pub use responsibility_view::ResponsibilityViewPage;
pub use user_info::UserInfoPage;
pub use user_items::UserItemsPage;
