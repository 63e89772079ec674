//! Team Page

use leptos::prelude::*;

use crate::catalog::{ADVISORS, COMPANY_STATS, MISSION_VALUES, TEAM_MEMBERS};
use crate::components::{Badge, BadgeVariant, Card};
use crate::models::TeamMember;

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="container py-8">
            <div class="mb-8 text-center">
                <h1 class="text-3xl font-bold mb-2">"Meet Our Team"</h1>
                <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                    "Passionate experts in AI, safety technology, and emergency response working together to make the world safer"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                {COMPANY_STATS.iter().map(|stat| view! {
                    <Card class="text-center">
                        <div class="icon-tile round mx-auto mb-3">{stat.icon}</div>
                        <div class="text-3xl font-bold text-primary mb-1">{stat.value}</div>
                        <div class="text-sm text-muted-foreground">{stat.label}</div>
                    </Card>
                }).collect_view()}
            </div>

            <div class="mb-12">
                <h2 class="text-2xl font-bold mb-6 text-center">"Core Team"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {TEAM_MEMBERS.iter().map(member_card).collect_view()}
                </div>
            </div>

            <div class="mb-12">
                <h2 class="text-2xl font-bold mb-6 text-center">"Advisory Board"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {ADVISORS.iter().map(|advisor| view! {
                        <Card class="text-center">
                            <div class="icon-tile round secondary mx-auto mb-4">"🏅"</div>
                            <h3 class="font-bold text-lg mb-1">{advisor.name}</h3>
                            <p class="text-primary font-semibold mb-1">{advisor.role}</p>
                            <p class="text-sm text-muted-foreground mb-2">{advisor.company}</p>
                            <Badge variant=BadgeVariant::Outline>{advisor.expertise}</Badge>
                        </Card>
                    }).collect_view()}
                </div>
            </div>

            <Card class="cta text-center">
                <h2 class="text-2xl font-bold mb-4">"Our Mission"</h2>
                <p class="text-lg text-muted-foreground mb-6 max-w-3xl mx-auto">
                    "We believe that technology should serve humanity's most critical needs. Our team is dedicated to building AI-powered safety solutions that protect lives, prevent accidents, and enable faster emergency response worldwide."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8">
                    {MISSION_VALUES.iter().map(|value| view! {
                        <div class="text-center">
                            <div class="icon-tile round mx-auto mb-3">{value.icon}</div>
                            <h3 class="font-semibold mb-2">{value.title}</h3>
                            <p class="text-sm text-muted-foreground">{value.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Card>

            <Card class="mt-8 text-center">
                <h2 class="text-2xl font-bold mb-4">"Join Our Mission"</h2>
                <p class="text-muted-foreground mb-6 max-w-2xl mx-auto">
                    "We're always looking for talented individuals who share our passion for safety technology and making a positive impact on the world."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button class="btn btn-emergency">"✉ View Open Positions"</button>
                    <button class="btn btn-outline">"GH Contribute to Open Source"</button>
                </div>
            </Card>
        </div>
    }
}

fn member_card(member: &'static TeamMember) -> impl IntoView {
    view! {
        <Card class="group">
            <div class="text-center">
                <div class="avatar mx-auto mb-4">{member.domain_glyph()}</div>
                <h3 class="text-xl font-semibold">{member.name}</h3>
                <p class="font-semibold text-primary">{member.role}</p>
                <Badge variant=BadgeVariant::Secondary>{member.domain}</Badge>
            </div>
            <div class="space-y-4">
                <p class="text-sm text-muted-foreground text-center">{member.bio}</p>
                <div>
                    <h4 class="text-sm font-semibold mb-2">"Expertise"</h4>
                    <div class="flex flex-wrap gap-1">
                        {member.skills.iter().map(|skill| view! {
                            <Badge variant=BadgeVariant::Outline>{*skill}</Badge>
                        }).collect_view()}
                    </div>
                </div>
                <div class="flex justify-center gap-3 pt-4 border-t">
                    {member.social.iter().map(|(platform, link)| view! {
                        <a href=*link target="_blank" rel="noopener noreferrer" class="btn btn-ghost btn-sm">
                            {platform.glyph()}
                        </a>
                    }).collect_view()}
                </div>
            </div>
        </Card>
    }
}
