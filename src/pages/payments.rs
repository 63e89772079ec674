//! Payments Page
//!
//! Subscription overview, plan and billing selectors, the demo payment
//! gateway and the invoice list. Every charge goes through the
//! `PaymentProcessor`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::catalog::{plan_by_id, DEFAULT_PLAN_ID, PAYMENT_HISTORY, PRICING_PLANS, SECURITY_FEATURES};
use crate::components::{Badge, Card, ProgressBar};
use crate::context::{use_app_context, AppContext};
use crate::pricing::{self, BillingCycle};
use crate::services::PaymentRequest;

const PAYMENT_CONFIRM_TEXT: &str =
    "Process a demo payment for the selected plan? No real charge will be made.";

/// Charge the selected plan. Ignored while another charge is running.
fn process_payment(
    ctx: &AppContext,
    plan_id: &'static str,
    cycle: BillingCycle,
    auto_renew: bool,
    processing: RwSignal<bool>,
) {
    if processing.get_untracked() {
        return;
    }
    let Some(plan) = plan_by_id(plan_id) else {
        tracing::warn!(plan = plan_id, "unknown plan selected");
        return;
    };
    let request = PaymentRequest {
        plan_id: plan.id.to_string(),
        cycle,
        amount: pricing::price(plan, cycle),
        auto_renew,
    };

    processing.set(true);
    let ctx = ctx.clone();
    spawn_local(async move {
        let outcome = ctx.services.payments.charge(&request).await;
        let _ = processing.try_set(false);
        match outcome {
            Ok(receipt) => {
                tracing::info!(plan = %receipt.plan_id, amount = receipt.amount, "payment completed");
                ctx.toaster.info(
                    "Payment Successful!",
                    "Your subscription has been updated successfully.",
                );
            }
            Err(e) => {
                tracing::error!("payment failed: {}", e);
                ctx.toaster.error("Payment failed", e.to_string());
            }
        }
    });
}

fn download_invoice(ctx: &AppContext, invoice: &'static str) {
    let ctx = ctx.clone();
    spawn_local(async move {
        match ctx.services.payments.invoice(invoice).await {
            Ok(handle) => {
                tracing::info!(file = %handle.file_name, "invoice generated");
                ctx.toaster.info(
                    "Invoice Generated",
                    format!("PDF invoice {} is ready for download.", handle.invoice),
                );
            }
            Err(e) => {
                tracing::error!(invoice, "invoice generation failed: {}", e);
                ctx.toaster.error("Invoice unavailable", e.to_string());
            }
        }
    });
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (plan_id, set_plan_id) = signal(DEFAULT_PLAN_ID);
    let (cycle, set_cycle) = signal(BillingCycle::Monthly);
    let (auto_renew, set_auto_renew) = signal(true);
    let processing = RwSignal::new(false);

    let current_plan = move || plan_by_id(plan_id.get());
    let current_price = move || {
        current_plan()
            .map(|plan| pricing::price(plan, cycle.get()))
            .unwrap_or_default()
    };

    let on_update = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| {
            process_payment(&ctx, plan_id.get_untracked(), cycle.get_untracked(), auto_renew.get_untracked(), processing)
        }
    };
    let on_gateway = {
        let ctx = ctx.clone();
        move |_: web_sys::MouseEvent| {
            if !browser::confirm(PAYMENT_CONFIRM_TEXT) {
                tracing::info!("demo payment cancelled");
                return;
            }
            process_payment(&ctx, plan_id.get_untracked(), cycle.get_untracked(), auto_renew.get_untracked(), processing)
        }
    };

    view! {
        <div class="container py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold mb-2">"Payments & Subscriptions"</h1>
                <p class="text-muted-foreground text-lg">
                    "Manage your subscription, payment methods, and billing information"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-6">
                    // Active subscription
                    <Card class="highlight">
                        <div class="flex items-center justify-between">
                            <div>
                                <h2 class="card-title"><span class="icon text-success">"✓"</span>" Active Subscription"</h2>
                                <p class="card-description">"Your current plan and billing details"</p>
                            </div>
                            <span class="badge badge-success">"Active"</span>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class="label">"Current Plan"</label>
                                <div class="flex items-center gap-2 mt-1">
                                    <span class="icon text-primary">{move || current_plan().map(|p| p.icon)}</span>
                                    <span class="font-semibold">{move || current_plan().map(|p| p.name)}</span>
                                </div>
                            </div>
                            <div>
                                <label class="label">"Billing Cycle"</label>
                                <div class="mt-1 font-semibold capitalize">{move || cycle.get().as_str()}</div>
                            </div>
                            <div>
                                <label class="label">"Amount"</label>
                                <div class="mt-1 text-2xl font-bold text-primary">{move || format!("${}", current_price())}</div>
                            </div>
                            <div>
                                <label class="label">"Next Payment"</label>
                                <div class="mt-1 font-semibold">"April 1, 2024"</div>
                            </div>
                        </div>
                        <div class="flex items-center justify-between pt-4 border-t">
                            <label class="switch flex items-center space-x-2" for="auto-renew">
                                <input
                                    id="auto-renew"
                                    type="checkbox"
                                    prop:checked=move || auto_renew.get()
                                    on:change=move |ev| set_auto_renew.set(event_target_checked(&ev))
                                />
                                <span>"Auto-renew subscription"</span>
                            </label>
                            <button class="btn btn-outline">"Manage Subscription"</button>
                        </div>
                    </Card>

                    // Plan selector
                    <Card>
                        <h2 class="card-title">"↻ Subscription Plan Selector"</h2>
                        <p class="card-description">"Change your subscription plan or billing cycle"</p>
                        <div class="space-y-4">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div>
                                    <label class="label" for="plan-select">"Select Plan"</label>
                                    <select
                                        id="plan-select"
                                        class="select"
                                        prop:value=move || plan_id.get()
                                        on:change=move |ev| {
                                            if let Some(plan) = plan_by_id(&event_target_value(&ev)) {
                                                set_plan_id.set(plan.id);
                                            }
                                        }
                                    >
                                        {PRICING_PLANS.iter().map(|plan| view! {
                                            <option value=plan.id>
                                                {move || format!("{} - ${}", plan.name, pricing::price(plan, cycle.get()))}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div>
                                    <label class="label" for="cycle-select">"Billing Cycle"</label>
                                    <select
                                        id="cycle-select"
                                        class="select"
                                        prop:value=move || cycle.get().as_str()
                                        on:change=move |ev| {
                                            if let Some(next) = BillingCycle::parse(&event_target_value(&ev)) {
                                                set_cycle.set(next);
                                            }
                                        }
                                    >
                                        <option value="monthly">"Monthly"</option>
                                        <option value="yearly">"Yearly (Save 20%)"</option>
                                    </select>
                                </div>
                            </div>

                            <div class="alert" role="note">
                                <span class="icon">"⚠"</span>
                                <span>
                                    {move || format!(
                                        "Plan changes will take effect at the next billing cycle. You'll be charged ${} {}.",
                                        current_price(),
                                        cycle.get().as_str(),
                                    )}
                                </span>
                            </div>

                            <button class="btn btn-primary w-full" disabled=move || processing.get() on:click=on_update>
                                {move || if processing.get() { "↻ Processing..." } else { "Update Subscription" }}
                            </button>
                        </div>
                    </Card>

                    // Demo gateway
                    <Card>
                        <h2 class="card-title">"💳 Mock Payment Gateway"</h2>
                        <p class="card-description">"Simulated payment interface (Demo purposes only)"</p>
                        <div class="space-y-4">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div>
                                    <label class="label">"Card Number"</label>
                                    <input class="input bg-muted" placeholder="**** **** **** 1234" readonly />
                                </div>
                                <div>
                                    <label class="label">"Expiry Date"</label>
                                    <input class="input bg-muted" placeholder="12/25" readonly />
                                </div>
                            </div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div>
                                    <label class="label">"CVV"</label>
                                    <input class="input bg-muted" placeholder="***" readonly />
                                </div>
                                <div>
                                    <label class="label">"OTP Verification"</label>
                                    <input class="input bg-muted" placeholder="123456" readonly />
                                </div>
                            </div>
                            <div class="flex items-center gap-2 p-3 rounded-lg bg-muted">
                                <span class="icon text-success">"🔒"</span>
                                <span class="text-sm">"Secure encrypted payment processing (Demo mode)"</span>
                            </div>
                            <button class="btn btn-emergency w-full" disabled=move || processing.get() on:click=on_gateway>
                                <span class="icon">"🛡"</span>
                                "Process Payment (Demo)"
                            </button>
                        </div>
                    </Card>
                </div>

                // Sidebar
                <div class="space-y-6">
                    <Card>
                        <h2 class="card-title">"$ Payment Tracker"</h2>
                        <p class="card-description">"Current billing period progress"</p>
                        <div class="space-y-4">
                            <div>
                                <div class="flex justify-between text-sm mb-2">
                                    <span>"Billing Period"</span>
                                    <span>"75% Complete"</span>
                                </div>
                                <ProgressBar percent=75u8 />
                                <p class="text-xs text-muted-foreground mt-1">"8 days remaining"</p>
                            </div>
                            <div class="space-y-2 pt-4 border-t">
                                <div class="flex justify-between">
                                    <span class="text-sm">"Current Amount"</span>
                                    <span class="font-semibold">{move || format!("${}", current_price())}</span>
                                </div>
                                <div class="flex justify-between">
                                    <span class="text-sm">"Next Due Date"</span>
                                    <span class="font-semibold">"Apr 1, 2024"</span>
                                </div>
                                <div class="flex justify-between">
                                    <span class="text-sm">"Payment Method"</span>
                                    <span class="font-semibold">"**** 1234"</span>
                                </div>
                            </div>
                        </div>
                    </Card>

                    <Card>
                        <h2 class="card-title">"🔒 Security Features"</h2>
                        <p class="card-description">"Payment security and encryption"</p>
                        <div class="space-y-3">
                            {SECURITY_FEATURES.iter().map(|feature| view! {
                                <div class="flex items-center gap-2">
                                    <span class="icon text-success">"✓"</span>
                                    <span class="text-sm">{*feature}</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>
                </div>
            </div>

            <Card class="mt-8">
                <h2 class="card-title">"📄 Payment History & Invoice Generator"</h2>
                <p class="card-description">"View past payments and download invoices"</p>
                <div class="overflow-x-auto">
                    <table class="w-full">
                        <thead>
                            <tr class="border-b">
                                <th class="text-left p-2">"Date"</th>
                                <th class="text-left p-2">"Amount"</th>
                                <th class="text-left p-2">"Plan"</th>
                                <th class="text-left p-2">"Status"</th>
                                <th class="text-left p-2">"Invoice"</th>
                                <th class="text-left p-2">"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {PAYMENT_HISTORY.iter().map(|payment| {
                                let ctx = ctx.clone();
                                let invoice = payment.invoice;
                                view! {
                                    <tr class="border-b">
                                        <td class="p-2">"📅 "{payment.date}</td>
                                        <td class="p-2 font-semibold">{payment.amount}</td>
                                        <td class="p-2">{payment.plan}</td>
                                        <td class="p-2"><Badge>{payment.status}</Badge></td>
                                        <td class="p-2 text-muted-foreground">{invoice}</td>
                                        <td class="p-2">
                                            <button
                                                class="btn btn-outline btn-sm"
                                                on:click=move |_| download_invoice(&ctx, invoice)
                                            >
                                                "⬇ Download PDF"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Card>
        </div>
    }
}
