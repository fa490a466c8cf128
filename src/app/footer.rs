use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::{portfolio, Icon};

use super::navbar::NAV_ITEMS;
use super::reveal::{scroll_to, scroll_to_top, Reveal};

#[component]
pub fn Footer() -> impl IntoView {
    let person = &portfolio().person;
    let contact = &person.contact;
    let socials = [
        (Icon::Github, "GitHub", contact.github.clone()),
        (Icon::Linkedin, "LinkedIn", contact.linkedin.clone()),
        (Icon::Mail, "Email", contact.mailto()),
    ];

    let quick_links = NAV_ITEMS
        .iter()
        .filter(|(_, anchor)| *anchor != "home")
        .map(|(name, anchor)| {
            view! {
                <li>
                    <button
                        class="text-muted text-sm hover:text-white transition-colors"
                        on:click=move |_| scroll_to(anchor)
                    >
                        {*name}
                    </button>
                </li>
            }
        })
        .collect_view();

    let year = Utc::now().year();

    view! {
        <footer class="border-t border-brightBlack">
            <div class="max-w-6xl mx-auto px-6 py-16">
                <div class="grid grid-cols-1 md:grid-cols-12 gap-4 mb-12">
                    <Reveal class="md:col-span-5">
                        <div class="bg-brightBlack/30 border border-brightBlack rounded-lg p-6 h-full">
                            <div class="text-2xl font-bold mb-4">{person.name.clone()}</div>
                            <p class="text-muted text-sm leading-relaxed">
                                {person.description.clone()}
                            </p>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=100 class="md:col-span-3">
                        <div class="bg-brightBlack/30 border border-brightBlack rounded-lg p-6 h-full">
                            <h4 class="text-sm font-semibold mb-4">"Connect"</h4>
                            <div class="flex gap-2">
                                {socials
                                    .into_iter()
                                    .map(|(icon, label, href)| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=label
                                                class="p-2 bg-brightBlack/50 border border-brightBlack rounded hover:bg-white hover:text-black transition-all duration-300"
                                            >
                                                <i class=icon.class()></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=200 class="md:col-span-4">
                        <div class="bg-brightBlack/30 border border-brightBlack rounded-lg p-6 h-full">
                            <h4 class="text-sm font-semibold mb-4">"Navigate"</h4>
                            <ul class="space-y-2">{quick_links}</ul>
                        </div>
                    </Reveal>
                </div>
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4 pt-8 border-t border-brightBlack">
                    <p class="text-muted text-xs">
                        {format!("© {year} {}. All rights reserved.", person.name)}
                    </p>
                    <p class="text-muted/50 text-xs">
                        {format!("Built {}", env!("BUILD_TIME"))}
                    </p>
                    <button
                        class="p-2 bg-brightBlack/50 border border-brightBlack rounded-lg text-muted hover:text-white transition-colors"
                        aria-label="Back to top"
                        on:click=move |_| scroll_to_top()
                    >
                        <span aria-hidden="true">"↑"</span>
                    </button>
                </div>
            </div>
        </footer>
    }
}
