//! Contact Page
//!
//! Inquiry form bound field-by-field to a `ContactFormState` store, plus
//! contact details and resource links.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog::{CONTACT_INFO, INQUIRY_TYPES, RESOURCES, SOCIAL_LINKS};
use crate::components::{Badge, BadgeVariant, Card};
use crate::contact::{
    settle_submit, ContactField, ContactFormState, ContactFormStateStoreFields,
    ContactFormStoreFields, FormError, FormPhase,
};
use crate::context::use_app_context;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = ctx.toaster;
    let inquiries = ctx.services.inquiries.clone();
    let store = Store::new(ContactFormState::default());

    let set_field = move |field: ContactField, value: String| store.write().set(field, value);
    let submitting = move || store.phase().get() == FormPhase::Submitting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = store.write().begin_submit();
        let submission = match result {
            Ok(submission) => submission,
            Err(FormError::AlreadySubmitting) => return,
            Err(e) => {
                tracing::warn!("contact form incomplete: {}", e);
                toaster.error("Missing information", e.to_string());
                return;
            }
        };

        tracing::info!(inquiry_type = %submission.inquiry_type, "sending inquiry");
        let inquiries = inquiries.clone();
        spawn_local(async move {
            match inquiries.send(&submission).await {
                Ok(()) => {
                    if !settle_submit(store, true) {
                        tracing::debug!("contact page left before the inquiry finished");
                    }
                    toaster.info(
                        "Message Sent!",
                        "Thank you for your inquiry. We'll get back to you within 24 hours.",
                    );
                }
                Err(e) => {
                    tracing::error!("inquiry failed: {}", e);
                    settle_submit(store, false);
                    toaster.error("Message not sent", e.to_string());
                }
            }
        });
    };

    view! {
        <div class="container py-8">
            <div class="mb-8 text-center">
                <h1 class="text-3xl font-bold mb-2">"Get in Touch"</h1>
                <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                    "Ready to enhance safety with AI? Let's discuss how FLARE Alert can protect your organization."
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                // Form
                <div class="lg:col-span-2">
                    <Card>
                        <h2 class="card-title">"💬 Send us a Message"</h2>
                        <p class="card-description">
                            "Fill out the form below and we'll get back to you as soon as possible"
                        </p>
                        <form class="space-y-4" on:submit=on_submit>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div>
                                    <label class="label" for="name">"Full Name *"</label>
                                    <input
                                        id="name"
                                        class="input"
                                        placeholder="Your full name"
                                        required
                                        prop:value=move || store.form().name().get()
                                        on:input=move |ev| set_field(ContactField::Name, event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="label" for="email">"Email Address *"</label>
                                    <input
                                        id="email"
                                        type="email"
                                        class="input"
                                        placeholder="your.email@company.com"
                                        required
                                        prop:value=move || store.form().email().get()
                                        on:input=move |ev| set_field(ContactField::Email, event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div>
                                    <label class="label" for="company">"Company/Organization"</label>
                                    <input
                                        id="company"
                                        class="input"
                                        placeholder="Your company name"
                                        prop:value=move || store.form().company().get()
                                        on:input=move |ev| set_field(ContactField::Company, event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="label" for="role">"Your Role"</label>
                                    <input
                                        id="role"
                                        class="input"
                                        placeholder="e.g. Safety Manager, CTO"
                                        prop:value=move || store.form().role().get()
                                        on:input=move |ev| set_field(ContactField::Role, event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <div>
                                <label class="label" for="inquiry-type">"Inquiry Type"</label>
                                <select
                                    id="inquiry-type"
                                    class="select"
                                    prop:value=move || store.form().inquiry_type().get()
                                    on:change=move |ev| set_field(ContactField::InquiryType, event_target_value(&ev))
                                >
                                    <option value="" disabled>"Select inquiry type"</option>
                                    {INQUIRY_TYPES.iter().map(|(value, label)| view! {
                                        <option value=*value>{*label}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            <div>
                                <label class="label" for="subject">"Subject *"</label>
                                <input
                                    id="subject"
                                    class="input"
                                    placeholder="Brief description of your inquiry"
                                    required
                                    prop:value=move || store.form().subject().get()
                                    on:input=move |ev| set_field(ContactField::Subject, event_target_value(&ev))
                                />
                            </div>

                            <div>
                                <label class="label" for="message">"Message *"</label>
                                <textarea
                                    id="message"
                                    class="textarea min-h-[120px]"
                                    placeholder="Tell us more about your needs, questions, or how we can help..."
                                    required
                                    prop:value=move || store.form().message().get()
                                    on:input=move |ev| set_field(ContactField::Message, event_target_value(&ev))
                                ></textarea>
                            </div>

                            <button type="submit" class="btn btn-emergency w-full" disabled=submitting>
                                <span class=move || if submitting() { "icon animate-pulse" } else { "icon" }>"➤"</span>
                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </Card>
                </div>

                // Sidebar
                <div class="space-y-6">
                    <Card>
                        <h2 class="card-title">"Contact Information"</h2>
                        <p class="card-description">"Multiple ways to reach our team"</p>
                        <div class="space-y-4">
                            {CONTACT_INFO.iter().map(|info| view! {
                                <div class="flex items-start gap-3">
                                    <div class="icon-tile">{info.icon}</div>
                                    <div>
                                        <div class="font-semibold">{info.label}</div>
                                        <div class="text-sm font-medium text-primary">{info.value}</div>
                                        <div class="text-xs text-muted-foreground">{info.note}</div>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    </Card>

                    <Card>
                        <h2 class="card-title">"Follow Us"</h2>
                        <p class="card-description">"Stay updated with our latest developments"</p>
                        <div class="space-y-3">
                            {SOCIAL_LINKS.iter().map(|(platform, label, url, description)| view! {
                                <a
                                    href=*url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-ghost w-full justify-start"
                                >
                                    <span class="icon mr-3">{platform.glyph()}</span>
                                    <div class="text-left">
                                        <div class="font-medium">{*label}</div>
                                        <div class="text-xs text-muted-foreground">{*description}</div>
                                    </div>
                                </a>
                            }).collect_view()}
                        </div>
                    </Card>

                    <Card>
                        <h2 class="card-title">"Quick Actions"</h2>
                        <p class="card-description">"Common requests and resources"</p>
                        <div class="space-y-3">
                            <button class="btn btn-outline w-full justify-between">
                                "Emergency Support"
                                <Badge variant=BadgeVariant::Destructive>"24/7"</Badge>
                            </button>
                            <button class="btn btn-outline w-full justify-between">
                                "Technical Documentation" <span class="icon">"→"</span>
                            </button>
                            <button class="btn btn-outline w-full justify-between">
                                "API Integration Guide" <span class="icon">"→"</span>
                            </button>
                        </div>
                    </Card>
                </div>
            </div>

            <div class="mt-12">
                <h2 class="text-2xl font-bold mb-6 text-center">"Resources & Next Steps"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {RESOURCES.iter().map(|resource| view! {
                        <Card class="group text-center">
                            <div class="icon-tile round mx-auto mb-4">{resource.icon}</div>
                            <h3 class="text-lg font-semibold">{resource.label}</h3>
                            <p class="card-description">{resource.note}</p>
                            <button class="btn btn-outline w-full">
                                {resource.value} <span class="icon ml-2">"→"</span>
                            </button>
                        </Card>
                    }).collect_view()}
                </div>
            </div>

            <Card class="mt-8 cta text-center">
                <div class="icon-tile round mx-auto mb-4">"🛡"</div>
                <h2 class="text-2xl font-bold mb-4">"Ready to Get Started?"</h2>
                <p class="text-muted-foreground mb-6 max-w-2xl mx-auto">
                    "Join hundreds of organizations already using FLARE Alert to enhance their safety protocols and emergency response capabilities."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button class="btn btn-emergency btn-lg">"👥 Schedule Demo"</button>
                    <button class="btn btn-outline btn-lg">"📄 Download Brochure"</button>
                </div>
            </Card>
        </div>
    }
}
