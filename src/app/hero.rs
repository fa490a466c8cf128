use chrono::Utc;
use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::{portfolio, Icon};

use super::reveal::{scroll_to, Reveal};

const CLOCK_TICK_MS: u64 = 1000;

#[component]
pub fn Hero() -> impl IntoView {
    let person = &portfolio().person;
    let (first_name, last_name) = person.name_parts();

    let (now, set_now) = signal(Utc::now());
    use_interval_fn(move || set_now(Utc::now()), CLOCK_TICK_MS);

    let project_grid = portfolio()
        .projects
        .iter()
        .map(|p| {
            view! {
                <div class="flex items-center justify-between py-1">
                    <span class="text-xs text-muted truncate">{p.name.clone()}</span>
                    <span class=format!(
                        "px-1.5 py-0.5 text-[10px] rounded text-black {}",
                        p.status.badge_class(),
                    )>{p.status.label()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="relative min-h-screen overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-brightBlack/20 via-transparent to-brightBlack/20"></div>
            <div class="relative z-10 max-w-7xl mx-auto px-6 py-20 lg:py-32">
                <div class="grid lg:grid-cols-12 gap-6 items-start">
                    <div class="lg:col-span-7 space-y-8">
                        <div class="space-y-4">
                            <Reveal>
                                <span class="text-sm text-muted tracking-wide uppercase">
                                    {person.title.clone()}
                                </span>
                            </Reveal>
                            <Reveal delay_ms=100>
                                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold tracking-tight">
                                    {first_name.to_string()} <br />
                                    <span class="text-muted">{last_name.to_string()}</span>
                                </h1>
                            </Reveal>
                            <Reveal delay_ms=200>
                                <p class="text-lg md:text-xl text-muted max-w-2xl leading-relaxed">
                                    {person.hero_description.clone()}
                                </p>
                            </Reveal>
                        </div>
                        <Reveal delay_ms=300 class="flex flex-wrap gap-4">
                            <button
                                class="px-6 py-3 bg-white text-black text-sm tracking-wide hover:bg-brightWhite transition-colors flex items-center gap-2"
                                on:click=move |_| scroll_to("about")
                            >
                                "VIEW WORK"
                            </button>
                            <a
                                href="/resume.pdf"
                                download="resume.pdf"
                                class="px-6 py-3 border border-brightBlack text-white text-sm tracking-wide hover:border-muted transition-colors flex items-center gap-2"
                            >
                                "DOWNLOAD CV" <i class=Icon::Download.class()></i>
                            </a>
                        </Reveal>
                    </div>
                    <div class="lg:col-span-5 grid grid-cols-2 gap-3">
                        <Reveal delay_ms=400 class="col-span-2">
                            <div class="bg-brightBlack/30 border border-brightBlack p-6 flex flex-col justify-between gap-4 hover:border-muted transition-all duration-300">
                                <span class="text-xs text-muted uppercase tracking-wide">
                                    "Location"
                                </span>
                                <div>
                                    <p class="text-2xl">
                                        {person.location.display_text.clone()}
                                    </p>
                                    <p class="text-sm text-muted">"Remote Available"</p>
                                </div>
                                <i class=Icon::Location.class()></i>
                            </div>
                        </Reveal>
                        <Reveal delay_ms=500>
                            <div class="bg-green/10 border border-green/40 p-4 h-full hover:border-green/70 transition-all duration-300">
                                <p class="text-green text-xs uppercase tracking-wide">
                                    {if person.status.available { "Available" } else { "Busy" }}
                                </p>
                                <p class="text-lg">{person.status.text.clone()}</p>
                            </div>
                        </Reveal>
                        <Reveal delay_ms=550>
                            <div class="bg-purple/10 border border-purple/40 p-4 h-full hover:border-purple/70 transition-all duration-300">
                                <p class="text-purple text-2xl">{person.stats.years_label.clone()}</p>
                                <p class="text-xs text-muted uppercase tracking-wide">
                                    {person.stats.years_description.clone()}
                                </p>
                            </div>
                        </Reveal>
                        <Reveal delay_ms=600>
                            <div class="bg-brightBlack/30 border border-brightBlack p-4 h-full hover:border-muted transition-all duration-300">
                                <span class="text-xs text-muted uppercase tracking-wide">
                                    "Projects"
                                </span>
                                {project_grid}
                            </div>
                        </Reveal>
                        <Reveal delay_ms=650>
                            <div class="bg-brightBlack/30 border border-brightBlack p-4 h-full flex flex-col justify-between hover:border-muted transition-all duration-300">
                                <span class="text-xs text-muted uppercase tracking-wide">
                                    "Local Time"
                                </span>
                                <p class="text-xl tabular-nums">
                                    {move || now().format("%H:%M:%S UTC").to_string()}
                                </p>
                                <p class="text-xs text-muted">
                                    {format!("{} cups of coffee", person.stats.coffee)}
                                </p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
