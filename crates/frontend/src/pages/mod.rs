//! Page components.

mod admin;
mod auth;
mod dashboard;

pub use admin::AdminPage;
pub use auth::AuthPage;
pub use dashboard::DashboardPage;
