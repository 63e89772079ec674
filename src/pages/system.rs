//! System Page
//!
//! Architecture overview. Clicking a component card opens its details;
//! clicking it again closes them.

use leptos::prelude::*;

use crate::catalog::{LIVE_STATUS, PIPELINE_STAGES, SYSTEM_COMPONENTS, SYSTEM_METRICS};
use crate::components::{Badge, BadgeVariant, Card, ProgressBar};
use crate::models::SystemComponentStatus;

/// New selection after clicking `id`
pub fn toggle_selection(current: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

fn component_badge(status: &str) -> BadgeVariant {
    match status {
        "Active" | "Ready" => BadgeVariant::Default,
        _ => BadgeVariant::Secondary,
    }
}

fn gauge_badge(status: &str) -> BadgeVariant {
    match status {
        "Excellent" | "Optimal" => BadgeVariant::Default,
        "Normal" | "Low" => BadgeVariant::Secondary,
        _ => BadgeVariant::Destructive,
    }
}

#[component]
pub fn SystemPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<&'static str>);

    view! {
        <div class="container py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-2">"System Architecture"</h1>
                <p class="text-muted-foreground text-lg">
                    "Comprehensive overview of FLARE Alert's emergency detection infrastructure"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                {SYSTEM_METRICS.iter().map(|metric| view! {
                    <Card>
                        <div class="flex items-center justify-between">
                            <div>
                                <p class="text-sm font-medium text-muted-foreground">{metric.label}</p>
                                <p class=format!("text-2xl font-bold {}", metric.note)>{metric.value}</p>
                            </div>
                            <span class=format!("icon text-3xl {}", metric.note)>{metric.icon}</span>
                        </div>
                    </Card>
                }).collect_view()}
            </div>

            <Card class="mb-8">
                <h2 class="card-title">"🛡 Processing Pipeline"</h2>
                <p class="card-description">"Real-time hazard detection and response workflow"</p>
                <div class="flex items-center justify-between p-6 bg-muted rounded-lg">
                    {PIPELINE_STAGES.iter().enumerate().map(|(index, stage)| view! {
                        <div class="flex items-center">
                            <div class="text-center">
                                <div class="pipeline-step">
                                    <span class="text-xs font-bold text-primary">{index + 1}</span>
                                </div>
                                <p class="text-xs font-medium">{*stage}</p>
                            </div>
                            {(index + 1 < PIPELINE_STAGES.len()).then(|| view! {
                                <span class="icon text-muted-foreground mx-4">"→"</span>
                            })}
                        </div>
                    }).collect_view()}
                </div>
                <div class="mt-4 text-center">
                    <Badge variant=BadgeVariant::Secondary>"Average Processing Time: 28 seconds"</Badge>
                </div>
            </Card>

            <div class="grid grid-cols-1 lg:grid-cols-2 xl:grid-cols-3 gap-6 mb-8">
                {SYSTEM_COMPONENTS.iter().map(|component| view! {
                    <ComponentCard component=component selected=selected set_selected=set_selected />
                }).collect_view()}
            </div>

            <Card>
                <h2 class="card-title">"📈 Live System Status"</h2>
                <p class="card-description">"Real-time monitoring and health metrics"</p>
                <div class="space-y-6">
                    {LIVE_STATUS.iter().map(|gauge| view! {
                        <div class="space-y-2">
                            <div class="flex justify-between items-center">
                                <span class="text-sm font-medium">{gauge.name}</span>
                                <div class="flex items-center gap-2">
                                    <span class="text-sm text-muted-foreground">{gauge.value}</span>
                                    <Badge variant=gauge_badge(gauge.status)>{gauge.status}</Badge>
                                </div>
                            </div>
                            <ProgressBar percent=gauge.percent />
                        </div>
                    }).collect_view()}
                </div>
                <div class="mt-6 pt-6 border-t flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="icon text-success">"🌐"</span>
                        <span class="text-sm font-medium">"All Systems Operational"</span>
                    </div>
                    <button class="btn btn-outline btn-sm">"View Detailed Logs"</button>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn ComponentCard(
    component: &'static SystemComponentStatus,
    selected: ReadSignal<Option<&'static str>>,
    set_selected: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let id = component.id;
    let is_selected = move || selected.get() == Some(id);

    view! {
        <div
            class=move || if is_selected() { "card cursor-pointer ring" } else { "card cursor-pointer" }
            on:click=move |_| set_selected.update(|current| *current = toggle_selection(*current, id))
        >
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="icon-tile">{component.icon}</div>
                    <div>
                        <h3 class="text-lg font-semibold">{component.name}</h3>
                        <Badge variant=component_badge(component.status)>{component.status}</Badge>
                    </div>
                </div>
                <span class="icon text-success">"✓"</span>
            </div>
            <p class="text-sm text-muted-foreground mb-4">{component.description}</p>
            <div class="space-y-2">
                {component.metrics.iter().map(|(key, value)| view! {
                    <div class="flex justify-between text-sm">
                        <span class="capitalize text-muted-foreground">{format!("{}:", key)}</span>
                        <span class="font-medium">{*value}</span>
                    </div>
                }).collect_view()}
            </div>
            <Show when=is_selected>
                <div class="mt-4 pt-4 border-t">
                    <p class="text-sm text-muted-foreground">{component.details}</p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_selection() {
        let first = toggle_selection(None, "camera");
        assert_eq!(first, Some("camera"));
        assert_eq!(toggle_selection(first, "ai"), Some("ai"));
        assert_eq!(toggle_selection(first, "camera"), None);
    }

    #[test]
    fn test_component_ids_unique() {
        let mut ids: Vec<_> = SYSTEM_COMPONENTS.iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SYSTEM_COMPONENTS.len());
    }
}
