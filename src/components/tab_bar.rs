//! Tab Bar Component
//!
//! Row of buttons switching between the sections of a page.

use leptos::prelude::*;

/// Tabs are `(value, label)` pairs
#[component]
pub fn TabBar(
    tabs: &'static [(&'static str, &'static str)],
    active: ReadSignal<&'static str>,
    on_change: impl Fn(&'static str) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {tabs.iter().map(|(value, label)| {
                let value = *value;
                let is_active = move || active.get() == value;
                view! {
                    <button
                        role="tab"
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| on_change(value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
