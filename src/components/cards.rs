//! Card Components
//!
//! Small presentational building blocks shared by the pages.

use leptos::prelude::*;

use crate::models::Stat;

/// Bordered content panel
#[component]
pub fn Card(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>{children()}</div>
    }
}

/// Figure with label, note and icon. `note_suffix` follows the highlighted note.
#[component]
pub fn StatCard(
    stat: &'static Stat,
    #[prop(optional)] note_suffix: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium">{stat.label}</span>
                <span class="icon text-muted-foreground">{stat.icon}</span>
            </div>
            <div class="text-2xl font-bold">{stat.value}</div>
            <p class="text-xs text-muted-foreground">
                <span class="text-success">{stat.note}</span>
                {note_suffix}
            </p>
        </div>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Destructive => "badge badge-destructive",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=variant.class()>{children()}</span>
    }
}

/// Horizontal bar filled to `percent` (clamped to 100)
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<u8>) -> impl IntoView {
    let width = move || format!("width: {}%", percent.get().min(100));
    view! {
        <div class="progress">
            <div class="progress-fill" style=width></div>
        </div>
    }
}

fn check_mark(positive: bool) -> (&'static str, &'static str) {
    if positive {
        ("✓", "text-success")
    } else {
        ("✗", "text-muted-foreground")
    }
}

/// List row with a check or cross mark
#[component]
pub fn CheckItem(
    text: &'static str,
    #[prop(default = true)] positive: bool,
) -> impl IntoView {
    let (mark, class) = check_mark(positive);
    view! {
        <li class="flex items-center text-sm">
            <span class=format!("icon mr-2 {}", class)>{mark}</span>
            <span>{text}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mark_variants() {
        assert_eq!(check_mark(true), ("✓", "text-success"));
        assert_eq!(check_mark(false), ("✗", "text-muted-foreground"));
    }
}
