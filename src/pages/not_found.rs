use leptos::prelude::*;

/// Fallback for paths outside the navigation table
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container py-20 text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-muted-foreground mb-6">"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn-outline">"Back to Home"</a>
        </div>
    }
}
