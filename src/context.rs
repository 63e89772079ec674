//! Application Context
//!
//! Shared handles provided via Leptos Context API. Page state stays local to
//! each page; only config, toasts and services are shared.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::services::Services;
use crate::toast::Toaster;

#[derive(Clone)]
pub struct AppContext {
    pub config: SiteConfig,
    pub toaster: Toaster,
    pub services: Services,
}

impl AppContext {
    pub fn new(config: SiteConfig, services: Services) -> Self {
        let toaster = Toaster::new(config.toast_lifetime_ms);
        Self {
            config,
            toaster,
            services,
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
