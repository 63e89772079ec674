//! Business Page
//!
//! Pricing plans with the monthly/yearly switch, revenue model and market
//! analysis tabs.

use leptos::prelude::*;

use crate::catalog::{
    COMPETITIVE_ADVANTAGES, DEFAULT_PLAN_ID, MARKET_METRICS, MARKET_SEGMENTS, PRICING_PLANS,
    PROJECTIONS, REVENUE_STREAMS,
};
use crate::components::{Badge, BadgeVariant, Card, CheckItem, ProgressBar, TabBar};
use crate::models::PricingPlan;
use crate::pricing::{self, BillingCycle};

const TABS: &[(&str, &str)] = &[
    ("pricing", "Pricing Plans"),
    ("revenue", "Revenue Model"),
    ("market", "Market Analysis"),
];

#[component]
pub fn BusinessPage() -> impl IntoView {
    let (tab, set_tab) = signal(TABS[0].0);
    let (cycle, set_cycle) = signal(BillingCycle::Monthly);
    let (selected, set_selected) = signal(DEFAULT_PLAN_ID);

    view! {
        <div class="container py-8">
            <div class="mb-8 text-center">
                <h1 class="text-3xl font-bold mb-2">"Business Model & Pricing"</h1>
                <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                    "Scalable pricing plans designed to grow with your safety needs and comprehensive revenue strategy"
                </p>
            </div>

            <div class="space-y-8">
                <TabBar tabs=TABS active=tab on_change=move |t| set_tab.set(t) />
                {move || match tab.get() {
                    "revenue" => view! { <RevenueTab /> }.into_any(),
                    "market" => view! { <MarketTab /> }.into_any(),
                    _ => view! {
                        <PricingTab cycle=cycle set_cycle=set_cycle selected=selected set_selected=set_selected />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn PricingTab(
    cycle: ReadSignal<BillingCycle>,
    set_cycle: WriteSignal<BillingCycle>,
    selected: ReadSignal<&'static str>,
    set_selected: WriteSignal<&'static str>,
) -> impl IntoView {
    let cycle_class = move |c: BillingCycle| {
        if cycle.get() == c { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm" }
    };

    view! {
        <div class="space-y-8">
            <div class="flex justify-center">
                <div class="flex items-center gap-4 p-1 bg-muted rounded-lg">
                    <button
                        class=move || cycle_class(BillingCycle::Monthly)
                        on:click=move |_| set_cycle.set(BillingCycle::Monthly)
                    >
                        "Monthly"
                    </button>
                    <button
                        class=move || cycle_class(BillingCycle::Yearly)
                        on:click=move |_| set_cycle.set(BillingCycle::Yearly)
                    >
                        "Yearly"
                        <span class="ml-2"><Badge variant=BadgeVariant::Secondary>"Save 20%"</Badge></span>
                    </button>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                {PRICING_PLANS.iter().map(|plan| view! {
                    <PlanCard plan=plan cycle=cycle selected=selected set_selected=set_selected />
                }).collect_view()}
            </div>

            <Card class="highlight text-center">
                <h3 class="text-xl font-bold mb-2">"Need a Custom Solution?"</h3>
                <p class="text-muted-foreground mb-6">
                    "We offer tailored packages for large enterprises, government agencies, and specialized use cases."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button class="btn btn-emergency">"🧮 Request Custom Quote"</button>
                    <button class="btn btn-outline">"Schedule Demo"</button>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn PlanCard(
    plan: &'static PricingPlan,
    cycle: ReadSignal<BillingCycle>,
    selected: ReadSignal<&'static str>,
    set_selected: WriteSignal<&'static str>,
) -> impl IntoView {
    let card_class = if plan.recommended { "plan-card recommended" } else { "plan-card" };
    let button_class = if plan.recommended { "btn btn-emergency w-full" } else { "btn btn-outline w-full" };

    view! {
        <Card class=card_class>
            {plan.recommended.then(|| view! {
                <div class="plan-ribbon">
                    <Badge>"★ Recommended"</Badge>
                </div>
            })}

            <div class="text-center">
                <div class="icon-tile round mx-auto mb-4">{plan.icon}</div>
                <h2 class="text-2xl font-semibold">{plan.name}</h2>
                <p class="card-description min-h-[3rem]">{plan.description}</p>
                <div class="pt-4">
                    <div class="text-4xl font-bold">{move || pricing::price_label(plan, cycle.get())}</div>
                    {move || pricing::savings_label(plan, cycle.get()).map(|label| view! {
                        <p class="text-sm text-success mt-1">{label}</p>
                    })}
                </div>
            </div>

            <div class="space-y-4">
                <ul class="space-y-3">
                    {plan.features.iter().map(|feature| view! { <CheckItem text=*feature /> }).collect_view()}
                </ul>

                {(!plan.limitations.is_empty()).then(|| view! {
                    <div class="pt-4 border-t">
                        <p class="text-xs text-muted-foreground mb-2">"Limitations:"</p>
                        <ul class="space-y-1">
                            {plan.limitations.iter().map(|limitation| view! {
                                <CheckItem text=*limitation positive=false />
                            }).collect_view()}
                        </ul>
                    </div>
                })}

                <button class=button_class on:click=move |_| set_selected.set(plan.id)>
                    {move || if selected.get() == plan.id { "Selected Plan" } else { "Choose Plan" }}
                    <span class="icon ml-2">"→"</span>
                </button>
            </div>
        </Card>
    }
}

#[component]
fn RevenueTab() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
            <Card>
                <h2 class="card-title">"◔ Revenue Streams"</h2>
                <p class="card-description">"Diversified revenue model ensuring sustainable growth"</p>
                <div class="space-y-6">
                    {REVENUE_STREAMS.iter().map(|stream| view! {
                        <div class="space-y-2">
                            <div class="flex justify-between items-center">
                                <span class="font-medium">{stream.name}</span>
                                <div class="text-right">
                                    <div class="font-bold text-primary">{format!("{}%", stream.percentage)}</div>
                                    <div class="text-sm text-muted-foreground">{stream.value}</div>
                                </div>
                            </div>
                            <ProgressBar percent=stream.percentage />
                            <p class="text-sm text-muted-foreground">{stream.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Card>

            <Card>
                <h2 class="card-title">"📈 Financial Projections"</h2>
                <p class="card-description">"5-year revenue and growth projections"</p>
                <div class="space-y-4">
                    {PROJECTIONS.iter().map(|projection| view! {
                        <div class="flex justify-between items-center p-3 bg-muted rounded-lg">
                            <div>
                                <div class="font-semibold">{projection.year}</div>
                                <div class="text-sm text-muted-foreground">{format!("{} customers", projection.customers)}</div>
                            </div>
                            <div class="text-right">
                                <div class="font-bold text-primary">{projection.revenue}</div>
                                <div class="text-sm text-success">{format!("+{}", projection.growth)}</div>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn MarketTab() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {MARKET_METRICS.iter().map(|metric| view! {
                    <Card class="text-center">
                        <div class="text-3xl font-bold text-primary mb-2">{metric.value}</div>
                        <div class="font-semibold mb-1">{metric.label}</div>
                        <div class="text-sm text-muted-foreground">{metric.note}</div>
                    </Card>
                }).collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <Card>
                    <h2 class="card-title">"Market Opportunity"</h2>
                    <p class="card-description">"Significant growth potential in safety technology sector"</p>
                    <div class="space-y-3">
                        {MARKET_SEGMENTS.iter().map(|(segment, size)| view! {
                            <div class="flex justify-between">
                                <span>{*segment}</span>
                                <span class="font-semibold">{*size}</span>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="pt-4 border-t">
                        <div class="flex justify-between text-lg font-bold">
                            <span>"Total Addressable Market"</span>
                            <span class="text-primary">"$12.8B"</span>
                        </div>
                    </div>
                </Card>

                <Card>
                    <h2 class="card-title">"Competitive Advantage"</h2>
                    <p class="card-description">"Key differentiators in the safety technology market"</p>
                    <div class="space-y-4">
                        {COMPETITIVE_ADVANTAGES.iter().map(|advantage| view! {
                            <div class="flex gap-3">
                                <span class="icon text-success">{advantage.icon}</span>
                                <div>
                                    <div class="font-semibold">{advantage.title}</div>
                                    <div class="text-sm text-muted-foreground">{advantage.description}</div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}
