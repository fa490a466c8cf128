use leptos::prelude::*;

use crate::content::{portfolio, Icon};

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    let data = portfolio();
    let person = &data.person;

    let highlights = data
        .highlights
        .iter()
        .enumerate()
        .map(|(i, h)| {
            view! {
                <Reveal delay_ms=(i as u32) * 100>
                    <div class="flex items-start gap-3 bg-brightBlack/30 border border-brightBlack rounded-lg p-4">
                        <div class="w-1.5 h-1.5 bg-white rounded-full mt-2 flex-shrink-0"></div>
                        <p class="text-sm text-muted leading-relaxed">{h.clone()}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    let education = data
        .education
        .iter()
        .enumerate()
        .map(|(i, edu)| {
            view! {
                <Reveal delay_ms=(i as u32) * 100>
                    <div class="bg-brightBlack/30 border border-brightBlack rounded-lg p-4 flex items-start gap-3">
                        <i class=format!("{} text-muted mt-1", Icon::Graduation.class())></i>
                        <div>
                            <h4 class="text-sm">{edu.degree.clone()}</h4>
                            <p class="text-xs text-muted">{edu.institution.clone()}</p>
                            <p class="text-xs text-muted">{edu.status.clone()}</p>
                            {edu
                                .current
                                .then(|| {
                                    view! {
                                        <span class="inline-block mt-1 px-2 py-0.5 text-[10px] uppercase tracking-wider bg-green/20 text-green rounded">
                                            "Currently Enrolled"
                                        </span>
                                    }
                                })}
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader tag="ABOUT" title="Who I Am" />
                <div class="grid lg:grid-cols-2 gap-10">
                    <div class="space-y-6">
                        <Reveal>
                            <p class="text-base text-muted leading-relaxed">
                                {person.description.clone()}
                            </p>
                        </Reveal>
                        <div class="grid grid-cols-3 gap-4">
                            <Reveal delay_ms=100>
                                <StatCard
                                    value=person.stats.years_label.clone()
                                    label=person.stats.years_description.clone()
                                />
                            </Reveal>
                            <Reveal delay_ms=200>
                                <StatCard
                                    value=format!("{}+", person.stats.projects)
                                    label="Projects".to_string()
                                />
                            </Reveal>
                            <Reveal delay_ms=300>
                                <StatCard
                                    value=person.stats.coffee.to_string()
                                    label="Cups of Coffee".to_string()
                                />
                            </Reveal>
                        </div>
                        <div class="space-y-3">{education}</div>
                    </div>
                    <div class="space-y-4">{highlights}</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(value: String, label: String) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 border border-brightBlack rounded-lg p-4 text-center">
            <div class="text-2xl mb-1">{value}</div>
            <div class="text-xs text-muted uppercase tracking-wider">{label}</div>
        </div>
    }
}

/// Shared section heading: small tag badge, title, divider.
#[component]
pub fn SectionHeader(
    tag: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <div class="inline-block mb-4 px-3 py-1 bg-brightBlack/30 rounded-md border border-brightBlack">
                <span class="text-xs tracking-wider">{tag}</span>
            </div>
            <h2 class="text-3xl md:text-4xl font-medium mb-4">{title}</h2>
            <div class="w-16 h-px bg-brightBlack mx-auto mb-6"></div>
            {subtitle
                .map(|s| {
                    view! { <p class="text-sm text-muted max-w-lg mx-auto leading-relaxed">{s}</p> }
                })}
        </Reveal>
    }
}
