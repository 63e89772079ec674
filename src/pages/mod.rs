//! Site Pages
//!
//! One component per route.

mod ai_features;
mod business;
mod contact;
mod dashboard;
mod home;
mod not_found;
mod payments;
mod system;
mod team;

pub use ai_features::AiFeaturesPage;
pub use business::BusinessPage;
pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use payments::PaymentsPage;
pub use system::SystemPage;
pub use team::TeamPage;
