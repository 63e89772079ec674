//! Home Page

use leptos::prelude::*;

use crate::catalog::{HOME_FEATURES, HOME_STATS};
use crate::components::{Badge, BadgeVariant, Card};
use crate::context::use_app_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_app_context().config;

    view! {
        <div class="flex flex-col min-h-screen">
            // Hero
            <section class="hero relative py-20 lg:py-32 overflow-hidden">
                <div class="container relative">
                    <div class="mx-auto max-w-4xl text-center">
                        <div class="mb-4">
                            <Badge variant=BadgeVariant::Secondary>"Emergency Safety Technology"</Badge>
                        </div>
                        <h1 class="text-4xl font-bold tracking-tight sm:text-6xl mb-6">
                            {config.brand_name.clone()}
                            <span class="block text-primary mt-2">{config.tagline.clone()}</span>
                        </h1>
                        <p class="text-xl text-muted-foreground mb-8 max-w-2xl mx-auto">
                            "Revolutionary AI-powered hazard detection system that instantly identifies dangers and coordinates emergency response to keep your community safe."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/dashboard" class="btn btn-emergency btn-xl">"📷 Launch Dashboard →"</a>
                            <a href="/system" class="btn btn-hero btn-xl">"🛡 View System"</a>
                        </div>
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 bg-card">
                <div class="container">
                    <div class="text-center mb-16">
                        <h2 class="text-3xl font-bold mb-4">"Advanced Safety Features"</h2>
                        <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                            "Cutting-edge technology designed to protect lives and prevent accidents"
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {HOME_FEATURES.iter().map(|feature| view! {
                            <Card>
                                <div class="icon-tile mb-4">{feature.icon}</div>
                                <h3 class="text-lg font-semibold">{feature.title}</h3>
                                <p class="card-description">{feature.description}</p>
                            </Card>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-20">
                <div class="container">
                    <div class="grid grid-cols-2 lg:grid-cols-4 gap-8">
                        {HOME_STATS.iter().map(|stat| view! {
                            <div class="text-center">
                                <div class="text-3xl lg:text-4xl font-bold text-primary mb-2">{stat.value}</div>
                                <div class="text-lg font-semibold mb-1">{stat.label}</div>
                                <div class="text-sm text-muted-foreground">{stat.note}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Emergency
            <section class="py-20 bg-primary-soft">
                <div class="container">
                    <div class="mx-auto max-w-4xl text-center">
                        <div class="icon-tile round mx-auto mb-6 emergency-pulse">"📞"</div>
                        <h2 class="text-3xl font-bold mb-4">"Emergency Response Ready"</h2>
                        <p class="text-xl text-muted-foreground mb-8">
                            "Integrated with emergency services for immediate response when critical situations are detected"
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button class="btn btn-emergency btn-lg emergency-pulse">"📞 Test Emergency Call"</button>
                            <a href="/contact" class="btn btn-outline btn-lg">"Learn More →"</a>
                        </div>
                    </div>
                </div>
            </section>

            // Call to action
            <section class="py-20">
                <div class="container">
                    <Card class="cta">
                        <div class="mx-auto max-w-3xl text-center">
                            <h2 class="text-3xl font-bold mb-4">"Ready to Enhance Safety?"</h2>
                            <p class="text-xl text-muted-foreground mb-8">
                                "Join the future of emergency response and hazard detection technology"
                            </p>
                            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                                <a href="/dashboard" class="btn btn-emergency btn-xl">"Get Started →"</a>
                                <a href="/business" class="btn btn-outline btn-xl">"View Pricing"</a>
                            </div>
                            <div class="flex items-center justify-center gap-6 mt-8 text-sm text-muted-foreground">
                                {["Free Trial", "24/7 Support", "Emergency Integration"].into_iter().map(|perk| view! {
                                    <div class="flex items-center gap-2">
                                        <span class="icon text-success">"✓"</span>
                                        {perk}
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </Card>
                </div>
            </section>
        </div>
    }
}
