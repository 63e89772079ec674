//! Dashboard Page
//!
//! Image upload, simulated hazard analysis and the emergency hand-off.
//!
//! The analysis loop is driven by `AnalysisWorkflow`: every timer tick
//! carries the run id it was started for, so selecting a new image while a
//! loop is still running makes the old loop stop at its next tick.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::catalog::{DASHBOARD_STATS, RECENT_ACTIVITY};
use crate::components::{Badge, BadgeVariant, Card, ProgressBar, StatCard};
use crate::context::{use_app_context, AppContext};
use crate::models::{ActivityKind, DetectionResult};
use crate::services::{DetectionRequest, EmergencyOrigin, EmergencyRequest};
use crate::workflow::{AnalysisWorkflow, RunId, Tick};

const DASHBOARD_CONFIRM_TEXT: &str = "This will initiate an emergency call to local fire department. This is a demo - no actual call will be made. Proceed?";

// ========================
// Analysis
// ========================

/// Tick `run` until it reaches 100, then ask the detector for a result
async fn drive_analysis(
    ctx: AppContext,
    workflow: RwSignal<AnalysisWorkflow>,
    run: RunId,
    location: ReadSignal<String>,
    notes: ReadSignal<String>,
) {
    let interval = ctx.config.progress_interval_ms;
    loop {
        TimeoutFuture::new(interval).await;
        match workflow.try_update(|wf| wf.tick(run)) {
            Some(Tick::Advanced(progress)) => tracing::debug!(run, progress, "analysis tick"),
            Some(Tick::Reached) => break,
            // superseded by a newer run, or the page is gone
            Some(Tick::Stale) | None => {
                tracing::debug!(run, "analysis loop stopped");
                return;
            }
        }
    }

    let Some(image) = workflow.with_untracked(|wf| wf.image().map(str::to_string)) else {
        return;
    };
    let request = DetectionRequest {
        image,
        location: location.get_untracked(),
        notes: notes.get_untracked(),
    };

    match ctx.services.detector.detect(&request).await {
        Ok(result) => {
            let hazard = result.hazard_detected;
            let accepted = workflow
                .try_update(|wf| wf.complete(run, result))
                .unwrap_or(false);
            if accepted && hazard {
                tracing::info!(run, "hazard detected");
                ctx.toaster.error(
                    "Hazard Detected!",
                    "High-risk fire hazard identified. Emergency protocols initiated.",
                );
            }
        }
        Err(e) => {
            tracing::error!(run, "hazard detection failed: {}", e);
            workflow.update(|wf| wf.analysis_failed(run));
            ctx.toaster.error("Analysis failed", e.to_string());
        }
    }
}

fn contact_emergency(ctx: &AppContext, result: &DetectionResult) {
    if !browser::confirm(DASHBOARD_CONFIRM_TEXT) {
        tracing::info!("emergency call cancelled");
        return;
    }
    let request = EmergencyRequest {
        origin: EmergencyOrigin::Dashboard,
        hazard_type: Some(result.hazard_type.clone()),
        location: Some(result.location.clone()),
    };
    let ctx = ctx.clone();
    spawn_local(async move {
        match ctx.services.dispatcher.dispatch(&request).await {
            Ok(ack) => ctx.toaster.error(ack.title, ack.message),
            Err(e) => {
                tracing::error!("emergency dispatch failed: {}", e);
                ctx.toaster.error("Emergency call failed", e.to_string());
            }
        }
    });
}

// ========================
// Page
// ========================

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let title = format!("{} Dashboard", ctx.config.brand_name);
    let workflow = RwSignal::new(AnalysisWorkflow::new(ctx.config.progress_step));
    let (location, set_location) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let on_file = {
        let ctx = ctx.clone();
        move |ev: web_sys::Event| {
            let Some(file) = browser::selected_file(&ev) else {
                return;
            };
            let Some(run) = workflow.try_update(|wf| wf.begin_upload()) else {
                return;
            };
            tracing::info!(run, file = %file.name(), "image selected");

            let ctx = ctx.clone();
            spawn_local(async move {
                match browser::read_as_data_url(&file).await {
                    Ok(data_url) => {
                        let loaded = workflow
                            .try_update(|wf| wf.image_loaded(run, data_url))
                            .unwrap_or(false);
                        if loaded {
                            drive_analysis(ctx, workflow, run, location, notes).await;
                        }
                    }
                    Err(e) => {
                        tracing::error!(run, "failed to read image: {}", e);
                        workflow.update(|wf| wf.upload_failed(run));
                        ctx.toaster.error("Upload failed", e);
                    }
                }
            });
        }
    };

    let on_analyze = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| {
            let Some(run) = workflow.try_update(|wf| wf.restart()).flatten() else {
                return;
            };
            tracing::info!(run, "re-analyzing current image");
            spawn_local(drive_analysis(ctx.clone(), workflow, run, location, notes));
        }
    };

    let image = move || workflow.with(|wf| wf.image().map(str::to_string));
    let analyzing = move || workflow.with(|wf| wf.is_analyzing());
    let progress = Signal::derive(move || workflow.with(|wf| wf.progress()));

    let results = move || match workflow.with(|wf| wf.result().cloned()) {
        None => view! {
            <div class="text-center py-8 text-muted-foreground">
                <div class="icon text-5xl mb-4 opacity-50">"📷"</div>
                <p>"Upload an image to begin hazard analysis"</p>
            </div>
        }
        .into_any(),
        Some(result) => {
            let ctx = ctx.clone();
            let call = result.clone();
            view! {
                <div class="space-y-4">
                    <div class="alert alert-destructive" role="alert">
                        <span class="icon">"⚠"</span>
                        <span>
                            <strong>{result.hazard_type.clone()}</strong>
                            " detected with "
                            <strong>{format!("{}% confidence", result.confidence)}</strong>
                        </span>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="label">"Risk Level"</label>
                            <div class="mt-1">
                                <Badge variant=BadgeVariant::Destructive>{result.risk_level.label()}</Badge>
                            </div>
                        </div>
                        <div>
                            <label class="label">"Location"</label>
                            <div class="flex items-center gap-1 mt-1">
                                <span class="icon text-muted-foreground">"📍"</span>
                                <span class="text-sm">{result.location.clone()}</span>
                            </div>
                        </div>
                    </div>

                    <div>
                        <label class="label">"Recommended Actions"</label>
                        <ul class="mt-2 space-y-1">
                            {result.recommendations.iter().map(|rec| view! {
                                <li class="flex items-start gap-2 text-sm">
                                    <span class="icon text-success">"✓"</span>
                                    {rec.clone()}
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <button
                        class="btn btn-emergency w-full emergency-pulse"
                        on:click=move |_| contact_emergency(&ctx, &call)
                    >
                        <span class="icon">"📞"</span>
                        "Contact Emergency Services"
                    </button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="container py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-2">{title}</h1>
                <p class="text-muted-foreground text-lg">
                    "Where Safety Meets Technology - Real-time hazard detection and emergency response"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                {DASHBOARD_STATS.iter().map(|stat| view! {
                    <StatCard stat=stat note_suffix=" from last month" />
                }).collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                // Upload
                <Card>
                    <h2 class="card-title">"⬆ Hazard Image Upload"</h2>
                    <p class="card-description">
                        "Upload images for AI-powered hazard detection and risk assessment"
                    </p>
                    <div class="space-y-4">
                        <div>
                            <label class="label" for="image-upload">"Select Image"</label>
                            <input
                                id="image-upload"
                                type="file"
                                accept="image/*"
                                class="input cursor-pointer"
                                on:change=on_file
                            />
                        </div>

                        {move || image().map(|src| view! {
                            <div class="border rounded-lg p-4">
                                <img src=src alt="Uploaded" class="w-full h-48 object-cover rounded-md" />
                            </div>
                        })}

                        <Show when=move || analyzing() && image().is_some()>
                            <div class="space-y-2">
                                <label class="label">"Analysis Progress"</label>
                                <ProgressBar percent=progress />
                                <p class="text-sm text-muted-foreground">
                                    "Analyzing image for potential hazards..."
                                </p>
                            </div>
                        </Show>

                        <div>
                            <label class="label" for="location">"Location (Optional)"</label>
                            <input
                                id="location"
                                class="input w-full"
                                placeholder="Building, floor, room number..."
                                prop:value=move || location.get()
                                on:input=move |ev| set_location.set(event_target_value(&ev))
                            />
                        </div>

                        <div>
                            <label class="label" for="notes">"Additional Notes"</label>
                            <textarea
                                id="notes"
                                class="textarea w-full"
                                placeholder="Describe what you're seeing or any additional context..."
                                prop:value=move || notes.get()
                                on:input=move |ev| set_notes.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <button
                            class="btn btn-emergency w-full"
                            disabled=move || image().is_none() || analyzing()
                            on:click=on_analyze
                        >
                            <span class="icon">"📷"</span>
                            {move || if analyzing() { "Analyzing..." } else { "Analyze for Hazards" }}
                        </button>
                    </div>
                </Card>

                // Results
                <Card>
                    <h2 class="card-title">"🛡 Analysis Results"</h2>
                    <p class="card-description">"Real-time hazard detection and risk assessment"</p>
                    {results}
                </Card>
            </div>

            <Card class="mt-8">
                <h2 class="card-title">"Recent Activity"</h2>
                <p class="card-description">"Latest hazard detections and system alerts"</p>
                <div class="space-y-4">
                    {RECENT_ACTIVITY.iter().map(|activity| {
                        let (icon, icon_class, variant) = match activity.kind {
                            ActivityKind::Emergency => ("⚠", "text-destructive", BadgeVariant::Destructive),
                            ActivityKind::Success => ("✓", "text-success", BadgeVariant::Default),
                            ActivityKind::Alert => ("⚠", "text-secondary", BadgeVariant::Secondary),
                        };
                        view! {
                            <div class="flex items-center justify-between p-3 border rounded-lg">
                                <div class="flex items-center gap-3">
                                    <span class=format!("icon {}", icon_class)>{icon}</span>
                                    <div>
                                        <p class="text-sm font-medium">{activity.event}</p>
                                        <p class="text-xs text-muted-foreground">{activity.time}</p>
                                    </div>
                                </div>
                                <Badge variant=variant>{activity.status}</Badge>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Card>
        </div>
    }
}
