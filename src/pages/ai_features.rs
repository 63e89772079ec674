//! AI Features Page

use leptos::prelude::*;

use crate::catalog::{
    AI_CAPABILITIES, DETECTION_STATISTICS, DETECTION_TYPES, MODEL_METRICS, PROCESSING_PERFORMANCE,
};
use crate::components::{Badge, BadgeVariant, Card, ProgressBar, TabBar};
use crate::models::DetectionType;

const TABS: &[(&str, &str)] = &[
    ("detection", "Detection Types"),
    ("models", "AI Models"),
    ("performance", "Performance"),
];

#[component]
pub fn AiFeaturesPage() -> impl IntoView {
    let (tab, set_tab) = signal(TABS[0].0);

    view! {
        <div class="container py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-2">"AI Detection Features"</h1>
                <p class="text-muted-foreground text-lg">
                    "Advanced machine learning models for comprehensive hazard detection and risk assessment"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                {AI_CAPABILITIES.iter().map(|capability| view! {
                    <Card>
                        <div class="flex items-center gap-3 mb-3">
                            <div class="icon-tile">{capability.icon}</div>
                            <div>
                                <h3 class="font-semibold text-sm">{capability.label}</h3>
                                <p class="text-lg font-bold text-primary">{capability.value}</p>
                            </div>
                        </div>
                        <p class="text-sm text-muted-foreground">{capability.note}</p>
                    </Card>
                }).collect_view()}
            </div>

            <div class="space-y-6">
                <TabBar tabs=TABS active=tab on_change=move |t| set_tab.set(t) />
                {move || match tab.get() {
                    "models" => models_panel().into_any(),
                    "performance" => performance_panel().into_any(),
                    _ => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                            {DETECTION_TYPES.iter().map(detection_card).collect_view()}
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

fn detection_card(kind: &'static DetectionType) -> impl IntoView {
    view! {
        <Card class="group">
            <div class="flex items-center gap-3">
                <div class=format!("icon-tile {}", kind.accent)>{kind.icon}</div>
                <div>
                    <h3 class="text-lg font-semibold">{kind.name}</h3>
                    <div class="flex items-center gap-2">
                        <Badge variant=BadgeVariant::Secondary>{format!("{}% Accuracy", kind.accuracy)}</Badge>
                        <span class="icon text-success">"✓"</span>
                    </div>
                </div>
            </div>
            <div class="space-y-4">
                <p class="text-sm text-muted-foreground">{kind.description}</p>
                <div>
                    <h4 class="text-sm font-semibold mb-2">"Detection Features"</h4>
                    <ul class="space-y-1">
                        {kind.features.iter().map(|feature| view! {
                            <li class="text-sm text-muted-foreground flex items-center gap-2">
                                <span class="dot"></span>
                                {*feature}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4 class="text-sm font-semibold mb-2">"Use Cases"</h4>
                    <div class="flex flex-wrap gap-1">
                        {kind.use_cases.iter().map(|case| view! {
                            <Badge variant=BadgeVariant::Outline>{*case}</Badge>
                        }).collect_view()}
                    </div>
                </div>
                <div class="space-y-2">
                    <div class="flex justify-between text-sm">
                        <span>"Accuracy Rate"</span>
                        <span class="font-medium">{format!("{}%", kind.accuracy)}</span>
                    </div>
                    <ProgressBar percent=kind.accuracy />
                </div>
            </div>
        </Card>
    }
}

fn models_panel() -> impl IntoView {
    view! {
        <Card>
            <h2 class="card-title">"🧠 Active AI Models"</h2>
            <p class="card-description">"Current machine learning models powering hazard detection"</p>
            <div class="space-y-4">
                {MODEL_METRICS.iter().map(|model| {
                    let variant = if model.status == "Active" { BadgeVariant::Default } else { BadgeVariant::Secondary };
                    view! {
                        <div class="flex items-center justify-between p-4 border rounded-lg">
                            <div class="flex-1">
                                <div class="flex items-center gap-3 mb-2">
                                    <h3 class="font-semibold">{model.name}</h3>
                                    <Badge variant=variant>{model.status}</Badge>
                                </div>
                                <div class="flex items-center gap-6 text-sm text-muted-foreground">
                                    <span>{format!("Accuracy: {}%", model.accuracy)}</span>
                                    <span>{format!("Speed: {}", model.speed)}</span>
                                </div>
                            </div>
                            <div class="w-24">
                                <ProgressBar percent={model.accuracy.round() as u8} />
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </Card>
    }
}

fn performance_panel() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Card>
                <h2 class="card-title">"Processing Performance"</h2>
                <p class="card-description">"Real-time AI model performance metrics"</p>
                <div class="space-y-4">
                    {PROCESSING_PERFORMANCE.iter().map(|gauge| view! {
                        <div class="space-y-2">
                            <div class="flex justify-between">
                                <span class="text-sm font-medium">{gauge.name}</span>
                                <span class="text-sm text-muted-foreground">{gauge.value}</span>
                            </div>
                            <ProgressBar percent=gauge.percent />
                        </div>
                    }).collect_view()}
                </div>
            </Card>

            <Card>
                <h2 class="card-title">"Detection Statistics"</h2>
                <p class="card-description">"Model accuracy and detection rates"</p>
                <div class="space-y-4">
                    {DETECTION_STATISTICS.iter().map(|(name, value, good)| {
                        let class = if *good { "text-lg font-bold text-success" } else { "text-lg font-bold text-destructive" };
                        view! {
                            <div class="flex justify-between items-center p-3 bg-muted rounded-lg">
                                <span class="text-sm font-medium">{*name}</span>
                                <span class=class>{*value}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}
