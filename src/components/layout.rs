//! Navigation Shell
//!
//! Sticky header with the link list, a slide-in mobile menu and the emergency
//! action, plus the footer. Wraps every routed page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::catalog::NAVIGATION;
use crate::components::EmergencyButton;
use crate::context::use_app_context;
use crate::nav;

const LOGO_SRC: &str = "/public/logo.png";

/// Header + page + footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <SiteHeader />
            <main class="flex-1">{children()}</main>
            <SiteFooter />
        </div>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_app_context();
    let brand = ctx.config.brand_name.clone();
    let tagline = ctx.config.tagline.clone();
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <div class="container flex h-16 items-center">
                // Desktop: logo + links
                <div class="mr-4 hidden md:flex">
                    <a href="/" class="brand mr-6 flex items-center space-x-3">
                        <img src=LOGO_SRC alt=format!("{} Logo", brand) class="h-10 w-10" />
                        <div class="hidden sm:block">
                            <span class="font-bold text-lg block">{brand.clone()}</span>
                            <span class="text-xs text-muted-foreground">{tagline.clone()}</span>
                        </div>
                    </a>
                    <nav class="flex items-center space-x-6 text-sm font-medium">
                        {NAVIGATION.iter().map(|item| {
                            view! {
                                <a
                                    href=item.path
                                    class=move || nav::link_class(item, &pathname.get())
                                >
                                    {item.label}
                                </a>
                            }
                        }).collect_view()}
                    </nav>
                </div>

                // Mobile menu toggle
                <button
                    class="menu-toggle md:hidden"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span aria-hidden="true">"☰"</span>
                    <span class="sr-only">"Toggle Menu"</span>
                </button>

                <div class="flex flex-1 items-center justify-between space-x-2 md:justify-end">
                    <div class="w-full flex-1 md:w-auto md:flex-none">
                        <a href="/" class="brand flex items-center space-x-2 md:hidden">
                            <img src=LOGO_SRC alt="" class="h-8 w-8" />
                            <span class="font-bold text-sm">{brand.clone()}</span>
                        </a>
                    </div>
                    <nav class="flex items-center space-x-3">
                        <span class="badge badge-secondary hidden sm:inline-flex">"Safety Tech"</span>
                        <EmergencyButton />
                    </nav>
                </div>
            </div>

            // Mobile overlay
            <Show when=move || menu_open.get()>
                <div class="mobile-overlay md:hidden" on:click=move |_| set_menu_open.set(false)></div>
                <aside class="mobile-panel md:hidden">
                    <a href="/" class="brand flex items-center space-x-3" on:click=move |_| set_menu_open.set(false)>
                        <img src=LOGO_SRC alt="" class="h-8 w-8" />
                        <div>
                            <span class="font-bold block">{brand.clone()}</span>
                            <span class="text-xs text-muted-foreground">{tagline.clone()}</span>
                        </div>
                    </a>
                    {move || nav::active_item(&pathname.get()).map(|item| view! {
                        <p class="mt-4 pl-6 text-xs text-muted-foreground">
                            "Viewing: "<span class="font-medium">{item.label}</span>
                        </p>
                    })}
                    <div class="my-4 flex flex-col space-y-3 pl-6">
                        {NAVIGATION.iter().map(|item| {
                            view! {
                                <a
                                    href=item.path
                                    class=move || nav::link_class(item, &pathname.get())
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    <div class="flex items-center space-x-3 p-2 rounded-lg">
                                        <span class="icon">{item.icon.glyph()}</span>
                                        <span>{item.label}</span>
                                    </div>
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </aside>
            </Show>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ctx = use_app_context();
    let line = format!("{} - Where Safety Meets Technology", ctx.config.brand_name);

    view! {
        <footer class="site-footer border-t py-6 md:py-0">
            <div class="container flex flex-col items-center justify-between gap-4 md:h-24 md:flex-row">
                <div class="flex items-center gap-2">
                    <span class="icon text-primary">"🛡"</span>
                    <p class="text-sm text-muted-foreground">{line}</p>
                </div>
                <div class="flex items-center space-x-4">
                    <button class="btn btn-ghost btn-sm">"Privacy"</button>
                    <button class="btn btn-ghost btn-sm">"Terms"</button>
                    <button class="btn btn-ghost btn-sm">"Support"</button>
                </div>
            </div>
        </footer>
    }
}
