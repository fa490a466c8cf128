use leptos::prelude::*;

use crate::content::{portfolio, Project};

use super::about::SectionHeader;
use super::reveal::Reveal;

/// Tags shown on a card before collapsing into a "+n" overflow marker.
const VISIBLE_TAGS: usize = 3;

#[component]
pub fn Projects() -> impl IntoView {
    let cards = portfolio()
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            view! { <ProjectCard project=project delay_ms=(i as u32) * 100 /> }
        })
        .collect_view();

    view! {
        <section id="projects" class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    tag="WORK"
                    title="Selected Projects"
                    subtitle="Things I have built, from shipped products to works in progress"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, delay_ms: u32) -> impl IntoView {
    let tags = project
        .tech_stack
        .iter()
        .take(VISIBLE_TAGS)
        .map(|tech| {
            view! {
                <span class="px-2 py-1 bg-brightBlack/50 text-muted text-xs rounded-md">
                    {tech.clone()}
                </span>
            }
        })
        .collect_view();
    let overflow = project.tech_stack.len().saturating_sub(VISIBLE_TAGS);

    let features = project
        .features
        .iter()
        .map(|feature| {
            view! {
                <div class="flex items-start gap-2">
                    <div class="w-1 h-1 bg-muted rounded-full mt-2 flex-shrink-0"></div>
                    <span class="text-xs text-muted leading-relaxed">{feature.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <Reveal delay_ms=delay_ms>
            <div class="group bg-brightBlack/30 border border-brightBlack rounded-xl p-6 h-full flex flex-col hover:border-muted hover:shadow-md hover:shadow-black/20 transition-all duration-200">
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-base font-medium">{project.name.clone()}</h3>
                    <span class=format!(
                        "px-2 py-0.5 text-[10px] uppercase tracking-wider rounded text-black {}",
                        project.status.badge_class(),
                    )>{project.status.label()}</span>
                </div>
                <p class="text-xs text-muted mb-2">{project.full_name.clone()}</p>
                <p class="text-sm text-muted leading-relaxed mb-4">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-1 mb-4">
                    {tags}
                    {(overflow > 0)
                        .then(|| {
                            view! {
                                <span class="px-2 py-1 bg-brightBlack/50 text-muted text-xs rounded-md">
                                    {format!("+{overflow}")}
                                </span>
                            }
                        })}
                </div>
                <div class="space-y-2 mt-auto">{features}</div>
                <p class="text-[10px] text-muted uppercase tracking-wider mt-4">
                    {project.role.clone()}
                </p>
            </div>
        </Reveal>
    }
}
