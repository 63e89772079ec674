//! UI Components
//!
//! Reusable Leptos components shared by the pages.

mod layout;
mod emergency_button;
mod cards;
mod tab_bar;

pub use layout::{Layout, SiteFooter, SiteHeader};
pub use emergency_button::EmergencyButton;
pub use cards::{Badge, BadgeVariant, Card, CheckItem, ProgressBar, StatCard};
pub use tab_bar::TabBar;
