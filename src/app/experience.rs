use leptos::{html::Div, prelude::*};

use crate::content::{portfolio, Icon, PortfolioData};

use super::about::SectionHeader;
use super::reveal::{observe_card, scroll_to, RevealSet, Reveal};

/// Per-card stagger applied on top of the viewport trigger.
const CARD_STAGGER_MS: u32 = 100;

/// A unified card over experience and education entries, so both render
/// through the same grid and share the reveal index space.
#[derive(Debug, Clone)]
struct Card {
    tag: &'static str,
    icon: Icon,
    position: String,
    company: String,
    location: String,
    duration: String,
    points: Vec<String>,
}

fn cards(data: &PortfolioData) -> Vec<Card> {
    let experience = data.experience.iter().map(|exp| Card {
        tag: exp.kind.label(),
        icon: exp.kind.icon(),
        position: exp.position.clone(),
        company: exp.company.clone(),
        location: exp.location.clone(),
        duration: exp.duration.clone(),
        points: exp.description.clone(),
    });
    let education = data.education.iter().map(|edu| Card {
        tag: "Education",
        icon: Icon::Graduation,
        position: edu.degree.clone(),
        company: edu.institution.clone(),
        location: data.person.location.display_text.clone(),
        duration: edu.status.clone(),
        points: Vec::new(),
    });
    experience.chain(education).collect()
}

#[component]
pub fn Experience() -> impl IntoView {
    let data = portfolio();
    // One reveal set for the whole grid; indices are card positions.
    let revealed = RevealSet::new();
    // Which card's detail view is open, if any.
    let selected = RwSignal::new(None::<usize>);

    let all_cards = cards(data);
    let card_views = all_cards
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, card)| {
            view! { <ExperienceCard card index revealed selected /> }
        })
        .collect_view();

    view! {
        <section id="experience" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    tag="EXPERIENCE"
                    title="Professional Journey"
                    subtitle="A comprehensive overview of my professional experience and educational background"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                    <CareerOverview />
                    <TimelineSummary />
                    {card_views}
                </div>
                <CallToAction />
                {move || {
                    selected
                        .get()
                        .and_then(|i| all_cards.get(i).cloned())
                        .map(|card| view! { <CardDetail card selected /> })
                }}
            </div>
        </section>
    }
}

/// A card that fades in the first time it scrolls into view. Its render
/// state reads set membership: absent means hidden and offset, present
/// means resting. The observer goes away with the section's scope.
/// Clicking the card opens its detail view.
#[component]
fn ExperienceCard(
    card: Card,
    index: usize,
    revealed: RevealSet,
    selected: RwSignal<Option<usize>>,
) -> impl IntoView {
    let el = NodeRef::<Div>::new();
    observe_card(el, index, revealed);

    let points = card
        .points
        .iter()
        .map(|point| {
            view! {
                <div class="flex items-start gap-2">
                    <div class="w-1 h-1 bg-muted rounded-full mt-2 flex-shrink-0"></div>
                    <span class="text-xs text-muted leading-relaxed">{point.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=el
            class=move || {
                format!(
                    "bg-brightBlack/30 border border-brightBlack rounded-xl p-6 cursor-pointer hover:border-muted transition-all duration-500 ease-out {}",
                    if revealed.contains(index) {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-5"
                    },
                )
            }
            style:transition-delay=format!("{}ms", index as u32 * CARD_STAGGER_MS)
            on:click=move |_| selected.set(Some(index))
        >
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 bg-brightBlack/50 rounded-lg flex items-center justify-center">
                        <i class=card.icon.class()></i>
                    </div>
                    <div>
                        <span class="text-xs text-muted uppercase tracking-wider">
                            {card.tag}
                        </span>
                        <h3 class="text-sm font-medium">{card.position.clone()}</h3>
                    </div>
                </div>
                <span class="text-xs text-muted">{card.duration.clone()}</span>
            </div>
            <div class="flex items-center gap-4 mb-4">
                <span class="text-xs text-muted">{card.company.clone()}</span>
                <span class="flex items-center gap-1 text-xs text-muted">
                    <i class=Icon::Location.class()></i>
                    {card.location.clone()}
                </span>
            </div>
            <div class="space-y-2">{points}</div>
        </div>
    }
}

/// Detail view for a single card. Clicking the backdrop or the close
/// control dismisses it.
#[component]
fn CardDetail(card: Card, selected: RwSignal<Option<usize>>) -> impl IntoView {
    let points = card
        .points
        .iter()
        .map(|point| {
            view! { <p class="text-muted text-sm leading-relaxed">{point.clone()}</p> }
        })
        .collect_view();

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50"
            on:click=move |_| selected.set(None)
        >
            <div
                class="bg-background rounded-xl w-full max-w-2xl max-h-[85vh] overflow-y-auto border border-brightBlack"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="relative p-6 border-b border-brightBlack">
                    <button
                        class="absolute top-6 right-6 text-muted hover:text-white transition-colors"
                        aria-label="Close"
                        on:click=move |_| selected.set(None)
                    >
                        <span aria-hidden="true">"✕"</span>
                    </button>
                    <div class="pr-8">
                        <span class="text-xs uppercase tracking-wider text-muted">
                            {card.tag}
                        </span>
                        <h3 class="text-xl font-medium mt-2 mb-1">{card.position.clone()}</h3>
                        <p class="text-sm text-muted">{card.company.clone()}</p>
                    </div>
                </div>
                <div class="p-6">
                    <div class="mb-6 space-y-3">
                        <h4 class="text-sm uppercase tracking-wider mb-3">"Description"</h4>
                        {points}
                    </div>
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <h4 class="text-sm uppercase tracking-wider mb-3">"Location"</h4>
                            <p class="text-muted text-sm flex items-center gap-2">
                                <i class=Icon::Location.class()></i>
                                {card.location.clone()}
                            </p>
                        </div>
                        <div>
                            <h4 class="text-sm uppercase tracking-wider mb-3">"Duration"</h4>
                            <p class="text-muted text-sm">{card.duration.clone()}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CareerOverview() -> impl IntoView {
    let data = portfolio();
    let skill_count: usize = data.skills.iter().map(|cat| cat.items.len()).sum();
    let stats = [
        (
            data.person.stats.years_label.clone(),
            "Years Experience",
            "Professional Development",
        ),
        (
            format!("{}+", data.person.stats.projects),
            "Projects Completed",
            "Delivered Solutions",
        ),
        (
            data.experience.len().to_string(),
            "Leadership Roles",
            "Team Management",
        ),
        (
            format!("{skill_count}+"),
            "Technical Skills",
            "Core Technologies",
        ),
    ];

    view! {
        <Reveal class="md:col-span-2">
            <div class="bg-brightBlack/30 border border-brightBlack rounded-xl p-6 h-full">
                <div class="mb-6">
                    <h3 class="text-lg font-medium mb-2">"Career Overview"</h3>
                    <p class="text-sm text-muted">"Professional metrics and achievements"</p>
                </div>
                <div class="grid grid-cols-2 gap-6">
                    {stats
                        .into_iter()
                        .enumerate()
                        .map(|(i, (value, label, description))| {
                            view! {
                                <Reveal delay_ms=(i as u32) * 100 class="text-center">
                                    <div class="text-3xl mb-1">{value}</div>
                                    <div class="text-xs text-muted uppercase tracking-wider mb-1">
                                        {label}
                                    </div>
                                    <div class="text-xs text-muted/70">{description}</div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn TimelineSummary() -> impl IntoView {
    let entries = portfolio()
        .timeline
        .iter()
        .enumerate()
        .map(|(i, item)| {
            view! {
                <Reveal delay_ms=(i as u32) * 100>
                    <div class="flex items-center gap-4">
                        <div class="w-10 h-8 bg-brightBlack/50 rounded-lg flex items-center justify-center">
                            <span class="text-xs text-muted">{item.year.clone()}</span>
                        </div>
                        <div class="flex-1">
                            <div class="text-sm">{item.event.clone()}</div>
                            <div class="text-xs text-muted uppercase tracking-wider">
                                {item.kind.clone()}
                            </div>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <Reveal>
            <div class="bg-brightBlack/30 border border-brightBlack rounded-xl p-6 h-full">
                <div class="mb-6">
                    <h3 class="text-lg font-medium mb-2">"Timeline"</h3>
                    <p class="text-sm text-muted">"Key milestones and progression"</p>
                </div>
                <div class="space-y-4">{entries}</div>
            </div>
        </Reveal>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <Reveal>
            <div class="bg-brightBlack/30 border border-brightBlack rounded-xl p-8 text-center">
                <h3 class="text-lg font-medium mb-2">"Ready to Collaborate?"</h3>
                <p class="text-sm text-muted mb-6 max-w-md mx-auto">
                    "I'm always open to discussing new opportunities and interesting projects."
                </p>
                <button
                    class="inline-flex items-center gap-2 px-6 py-3 bg-white text-black text-sm rounded-lg hover:bg-brightWhite transition-colors"
                    on:click=move |_| scroll_to("contact")
                >
                    "Get in Touch"
                </button>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_merge_experience_then_education() {
        let data = crate::content::load().unwrap();
        let cards = cards(&data);
        assert_eq!(cards.len(), data.experience.len() + data.education.len());
        // Experience entries come first and keep their order.
        for (card, exp) in cards.iter().zip(&data.experience) {
            assert_eq!(card.position, exp.position);
            assert_eq!(card.tag, exp.kind.label());
        }
        // Education entries follow, tagged uniformly.
        for (card, edu) in cards[data.experience.len()..].iter().zip(&data.education) {
            assert_eq!(card.position, edu.degree);
            assert_eq!(card.tag, "Education");
            assert!(card.points.is_empty());
        }
    }

    #[test]
    fn test_card_selection_round_trip() {
        let owner = Owner::new();
        owner.set();
        let data = crate::content::load().unwrap();
        let all = cards(&data);
        let selected = RwSignal::new(None::<usize>);

        selected.set(Some(1));
        let open = selected.get_untracked().and_then(|i| all.get(i).cloned());
        assert_eq!(open.map(|c| c.position), Some(all[1].position.clone()));

        selected.set(None);
        assert!(selected.get_untracked().is_none());
    }

    #[test]
    fn test_out_of_range_selection_shows_nothing() {
        let owner = Owner::new();
        owner.set();
        let data = crate::content::load().unwrap();
        let all = cards(&data);
        let selected = RwSignal::new(Some(all.len()));
        assert!(selected.get_untracked().and_then(|i| all.get(i)).is_none());
    }

    #[test]
    fn test_experience_cards_carry_points() {
        let data = crate::content::load().unwrap();
        let cards = cards(&data);
        for card in cards.iter().take(data.experience.len()) {
            assert!(!card.points.is_empty());
        }
    }
}
