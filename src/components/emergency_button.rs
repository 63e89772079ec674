//! Emergency Button Component
//!
//! Header "Emergency" action. Asks for confirmation, then hands the call to
//! the `EmergencyDispatcher` and shows its acknowledgement.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::services::{EmergencyOrigin, EmergencyRequest};

pub const HEADER_CONFIRM_TEXT: &str =
    "This would call emergency services. This is a demo - no actual call will be made.";

#[component]
pub fn EmergencyButton() -> impl IntoView {
    let ctx = use_app_context();
    let dispatcher = ctx.services.dispatcher.clone();
    let toaster = ctx.toaster;

    let on_click = move |_| {
        if !browser::confirm(HEADER_CONFIRM_TEXT) {
            tracing::info!("emergency call cancelled");
            return;
        }
        let dispatcher = dispatcher.clone();
        spawn_local(async move {
            let request = EmergencyRequest {
                origin: EmergencyOrigin::Header,
                hazard_type: None,
                location: None,
            };
            match dispatcher.dispatch(&request).await {
                Ok(ack) => browser::alert(&ack.message),
                Err(e) => {
                    tracing::error!("emergency dispatch failed: {}", e);
                    toaster.error("Emergency call failed", e.to_string());
                }
            }
        });
    };

    view! {
        <button class="btn btn-emergency btn-sm emergency-pulse" on:click=on_click>
            <span class="icon">"📞"</span>
            "Emergency"
        </button>
    }
}
