#![allow(warnings)]
//! FLARE Alert Frontend Entry Point

mod app;
mod browser;
mod catalog;
mod components;
mod config;
mod contact;
mod context;
mod models;
mod nav;
mod pages;
mod pricing;
mod services;
mod toast;
mod workflow;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
