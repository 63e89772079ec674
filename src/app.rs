//! FLARE Alert App
//!
//! Root component: builds the shared context and mounts the routed pages
//! inside the site layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::Layout;
use crate::config::SiteConfig;
use crate::context::AppContext;
use crate::pages::{
    AiFeaturesPage, BusinessPage, ContactPage, DashboardPage, HomePage, NotFoundPage,
    PaymentsPage, SystemPage, TeamPage,
};
use crate::services::Services;
use crate::toast::ToastViewport;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::load();
    let services = Services::mock(&config);
    let ctx = AppContext::new(config, services);
    let toaster = ctx.toaster;

    tracing::info!(brand = %ctx.config.brand_name, "starting site");

    // Provide context to all pages
    provide_context(ctx);

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("system") view=SystemPage/>
                    <Route path=StaticSegment("ai-features") view=AiFeaturesPage/>
                    <Route path=StaticSegment("business") view=BusinessPage/>
                    <Route path=StaticSegment("payments") view=PaymentsPage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </Layout>
            <ToastViewport toaster=toaster/>
        </Router>
    }
}
