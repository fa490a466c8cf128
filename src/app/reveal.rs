use std::collections::HashSet;

use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fraction of an element's bounding box that must be inside the viewport
/// before it counts as seen.
const REVEAL_THRESHOLD: f64 = 0.1;
/// Inset on the observation root, so elements trigger only once they are
/// meaningfully inside the viewport.
const REVEAL_ROOT_MARGIN: &str = "-50px";

/// Set of card indices that have entered the viewport at least once.
///
/// Membership only grows - a card that has been revealed stays revealed for
/// the lifetime of the owning section, so the fade-in plays exactly once and
/// never reverses on scroll-out.
#[derive(Clone, Copy)]
pub struct RevealSet(RwSignal<HashSet<usize>>);

impl RevealSet {
    pub fn new() -> Self {
        Self(RwSignal::new(HashSet::new()))
    }

    pub fn mark(&self, index: usize) {
        self.0.update(|seen| {
            seen.insert(index);
        });
    }

    /// Reactive membership read; drives the card's opacity/offset target.
    pub fn contains(&self, index: usize) -> bool {
        self.0.with(|seen| seen.contains(&index))
    }
}

impl Default for RevealSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Watch `el` and mark `index` in `revealed` once it intersects the viewport.
/// The observer is released when the owning reactive scope is disposed.
pub fn observe_card(el: NodeRef<Div>, index: usize, revealed: RevealSet) {
    use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                revealed.mark(index);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(REVEAL_ROOT_MARGIN)
            .thresholds(vec![REVEAL_THRESHOLD]),
    );
}

/// Wraps a block that fades and slides in the first time it scrolls into
/// view. `delay_ms` staggers siblings; the transition plays once.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<Div>::new();
    let (shown, set_shown) = signal(false);

    use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                set_shown(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(REVEAL_ROOT_MARGIN)
            .thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <div
            node_ref=el
            class=move || {
                format!(
                    "transition-all duration-500 ease-out {} {}",
                    if shown() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-5" },
                    class,
                )
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}

/// Smooth-scroll the document so the section with `id` sits near the top of
/// the viewport. A missing target is a no-op.
pub fn scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll back to the top of the page.
pub fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_set_starts_empty() {
        let owner = Owner::new();
        owner.set();
        let set = RevealSet::new();
        assert!(!set.contains(0));
        assert!(!set.contains(7));
    }

    #[test]
    fn test_reveal_set_marks_indices_independently() {
        let owner = Owner::new();
        owner.set();
        let set = RevealSet::new();
        set.mark(2);
        assert!(set.contains(2));
        assert!(!set.contains(1));
        assert!(!set.contains(3));
    }

    #[test]
    fn test_reveal_set_is_monotone() {
        // Once marked, an index stays revealed; re-marking is idempotent.
        let owner = Owner::new();
        owner.set();
        let set = RevealSet::new();
        set.mark(0);
        set.mark(0);
        assert!(set.contains(0));
        set.mark(5);
        assert!(set.contains(0));
        assert!(set.contains(5));
    }
}
