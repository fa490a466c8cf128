use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::{portfolio, Icon};

use super::reveal::scroll_to;

/// Label and anchor id for each in-page navigation target.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("About", "about"),
    ("Work", "projects"),
    ("Experience", "experience"),
    ("Contact", "contact"),
];

/// Scroll depth past which the navbar gets a solid backdrop.
const SCROLL_THRESHOLD: f64 = 20.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y() > SCROLL_THRESHOLD;
    let (menu_open, set_menu_open) = signal(false);

    let contact = &portfolio().person.contact;
    let socials = [
        (Icon::Github, contact.github.clone(), "GitHub"),
        (Icon::Linkedin, contact.linkedin.clone(), "LinkedIn"),
        (Icon::Mail, contact.mailto(), "Email"),
    ];

    let nav_links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|(name, anchor)| {
                let class = if mobile {
                    "block w-full text-left px-4 py-2 text-sm hover:bg-brightBlack/30 rounded-md"
                } else {
                    "px-3 py-1.5 text-xs text-muted hover:text-white hover:bg-brightBlack/30 rounded-full transition-all duration-200"
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| {
                            scroll_to(anchor);
                            set_menu_open(false);
                        }
                    >
                        {*name}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled() {
                    "bg-black/80 backdrop-blur-xl border-b border-brightBlack/50 shadow-lg"
                } else {
                    "bg-transparent"
                },
            )
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <div class="flex items-center justify-between h-14">
                    <button
                        class="text-xs font-semibold tracking-[0.2em] uppercase hover:text-muted transition-colors"
                        on:click=move |_| {
                            scroll_to("home");
                            set_menu_open(false);
                        }
                    >
                        {portfolio().person.name.clone()}
                    </button>
                    <div class="hidden md:flex items-center space-x-1 bg-brightBlack/20 backdrop-blur-sm rounded-full border border-brightBlack/50 p-1">
                        {nav_links(false)}
                    </div>
                    <div class="hidden md:flex items-center space-x-2">
                        {socials
                            .iter()
                            .map(|(icon, href, label)| {
                                view! {
                                    <a
                                        href=href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=*label
                                        class="p-2 text-muted hover:text-white hover:bg-brightBlack/30 rounded-lg transition-all duration-200"
                                    >
                                        <i class=icon.class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="md:hidden">
                        <button
                            class="p-2 text-muted hover:text-white rounded-lg"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if menu_open() {
                                    Either::Left(view! { <span aria-hidden="true">"✕"</span> })
                                } else {
                                    Either::Right(view! { <span aria-hidden="true">"☰"</span> })
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
            {move || {
                if menu_open() {
                    Some(
                        view! {
                            <div class="md:hidden bg-black/95 backdrop-blur-xl border-b border-brightBlack/50 px-4 py-3 space-y-1">
                                {nav_links(true)}
                            </div>
                        },
                    )
                } else {
                    None
                }
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_anchors_are_bare_ids() {
        // scroll_to takes element ids, not href fragments.
        for (name, anchor) in NAV_ITEMS {
            assert!(!name.is_empty());
            assert!(!anchor.starts_with('#'), "{anchor} should be a bare id");
            assert!(anchor.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
