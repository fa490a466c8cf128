use leptos::prelude::*;

use crate::content::{portfolio, SkillCategory};

use super::about::SectionHeader;
use super::reveal::Reveal;

#[component]
pub fn Skills() -> impl IntoView {
    let categories = portfolio()
        .skills
        .iter()
        .enumerate()
        .map(|(i, cat)| {
            view! { <CategoryCard category=cat delay_ms=(i as u32) * 100 /> }
        })
        .collect_view();

    view! {
        <section id="skills" class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    tag="SKILLS"
                    title="Technical Proficiency"
                    subtitle="Tools and technologies I work with, and how comfortable I am with each"
                />
                <div class="grid md:grid-cols-2 gap-6">{categories}</div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory, delay_ms: u32) -> impl IntoView {
    let bars = category
        .items
        .iter()
        .map(|skill| {
            view! {
                <div>
                    <div class="flex items-center justify-between mb-1">
                        <span class="text-sm text-white">{skill.name.clone()}</span>
                        <span class="text-xs text-muted tabular-nums">
                            {format!("{}%", skill.level)}
                        </span>
                    </div>
                    <div class="h-1.5 bg-brightBlack/50 rounded-full overflow-hidden">
                        <div
                            class="h-full bg-white rounded-full transition-all duration-700 ease-out"
                            style:width=format!("{}%", skill.level)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Reveal delay_ms=delay_ms>
            <div class="bg-brightBlack/30 border border-brightBlack rounded-xl p-6 h-full">
                <div class="flex items-center gap-3 mb-6">
                    <div class="w-10 h-10 bg-brightBlack/50 rounded-lg flex items-center justify-center">
                        <i class=category.icon.class()></i>
                    </div>
                    <h3 class="text-lg font-medium">{category.name.clone()}</h3>
                </div>
                <div class="space-y-4">{bars}</div>
            </div>
        </Reveal>
    }
}
