use leptos::{either::Either, ev::SubmitEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use thiserror::Error;

use crate::content::{portfolio, Icon};

use super::about::SectionHeader;
use super::reveal::Reveal;

/// Simulated network round-trip for a submission.
const SUBMIT_LATENCY_MS: f64 = 2000.0;
/// How long the status message stays up before auto-dismissing.
const STATUS_DISMISS_MS: f64 = 5000.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Error sending message. Please try again or contact me directly.")]
    Transport,
}

/// Outcome of the last finished attempt, shown until dismissed. Kept apart
/// from the in-flight flag so a status dismissal can never touch the
/// submit control.
type SubmitStatus = Option<Result<(), SubmitError>>;

/// Simulated delivery. Always resolves Ok; the error branch stays in place
/// for a future real transport and for the retry rendering path.
fn deliver(_name: &str, _email: &str, _subject: &str, _message: &str) -> Result<(), SubmitError> {
    Ok(())
}

/// Resolve a finished attempt: success clears the fields, failure leaves
/// them populated for retry.
fn finish(
    fields: [RwSignal<String>; 4],
    result: Result<(), SubmitError>,
) -> Result<(), SubmitError> {
    if result.is_ok() {
        for field in fields {
            field.set(String::new());
        }
    }
    result
}

/// Auto-dismiss: only the status message goes away.
fn dismiss_status(status: RwSignal<SubmitStatus>) {
    status.set(None);
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeader
                    tag="CONTACT"
                    title="Get In Touch"
                    subtitle="Have a project in mind or want to collaborate? I'd love to hear from you."
                />
                <div class="grid lg:grid-cols-5 gap-6">
                    <div class="lg:col-span-2 space-y-6">
                        <ContactInfo />
                    </div>
                    <div class="lg:col-span-3">
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let person = &portfolio().person;
    let contact = &person.contact;
    let info = [
        (Icon::Mail, "Email", contact.email.clone(), contact.mailto()),
        (Icon::Phone, "Phone", contact.phone.clone(), contact.tel()),
        (
            Icon::Location,
            "Location",
            person.location.full(),
            person.location.maps_url(),
        ),
    ];
    let socials = [
        (Icon::Github, "GitHub", contact.github.clone()),
        (Icon::Linkedin, "LinkedIn", contact.linkedin.clone()),
        (Icon::Mail, "Email", contact.mailto()),
    ];

    view! {
        <div class="grid gap-4">
            {info
                .into_iter()
                .enumerate()
                .map(|(i, (icon, label, value, href))| {
                    let external = href.starts_with("http");
                    view! {
                        <Reveal delay_ms=(i as u32) * 100>
                            <a
                                href=href
                                target=if external { "_blank" } else { "_self" }
                                rel=if external { "noopener noreferrer" } else { "" }
                                class="group flex p-4 bg-brightBlack/30 rounded-lg border border-brightBlack hover:border-muted transition-all duration-200"
                            >
                                <div class="flex items-center gap-3 w-full">
                                    <div class="p-2 bg-brightBlack/50 rounded-md">
                                        <i class=icon.class()></i>
                                    </div>
                                    <div class="flex-1">
                                        <h3 class="text-muted text-xs uppercase tracking-wider">
                                            {label}
                                        </h3>
                                        <p class="text-sm">{value}</p>
                                    </div>
                                </div>
                            </a>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
        <Reveal delay_ms=300>
            <div class="bg-brightBlack/30 p-4 rounded-lg border border-brightBlack">
                <h3 class="text-sm mb-3">"Connect with me"</h3>
                <div class="flex gap-3">
                    {socials
                        .into_iter()
                        .map(|(icon, label, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=label
                                    class="p-2 bg-brightBlack/50 rounded-md text-muted hover:text-white transition-colors"
                                >
                                    <i class=icon.class()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
        <Reveal delay_ms=400>
            <div class="bg-brightBlack/30 p-4 rounded-lg border border-brightBlack">
                <h3 class="text-sm mb-2">"Available for work"</h3>
                <p class="text-muted text-xs leading-relaxed">
                    "I'm open for freelance projects and full-time opportunities. Let's collaborate and build something exceptional."
                </p>
            </div>
        </Reveal>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let status = RwSignal::new(None::<Result<(), SubmitError>>);

    // Both timers belong to this scope and are cancelled on unmount.
    let UseTimeoutFnReturn {
        start: start_dismiss,
        stop: stop_dismiss,
        ..
    } = use_timeout_fn(move |_: ()| dismiss_status(status), STATUS_DISMISS_MS);

    let UseTimeoutFnReturn {
        start: start_submit,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            let result = deliver(
                &name.get_untracked(),
                &email.get_untracked(),
                &subject.get_untracked(),
                &message.get_untracked(),
            );
            status.set(Some(finish([name, email, subject, message], result)));
            submitting.set(false);
            start_dismiss(());
        },
        SUBMIT_LATENCY_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        // A dismiss left over from an earlier attempt must not fire while
        // this one is in flight.
        stop_dismiss();
        log::debug!("contact form submitted");
        submitting.set(true);
        start_submit(());
    };

    let field_class = "w-full px-3 py-2 bg-brightBlack/50 border border-brightBlack rounded-md text-white text-sm placeholder-muted focus:outline-none focus:ring-1 focus:ring-white transition-all";

    view! {
        <Reveal>
            <div class="bg-brightBlack/30 p-6 rounded-lg border border-brightBlack">
                <h3 class="text-lg mb-5">"Send a message"</h3>
                <form on:submit=on_submit class="space-y-4">
                    <div class="grid md:grid-cols-2 gap-4">
                        <div>
                            <label for="name" class="block text-muted text-xs mb-1">
                                "Name"
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                prop:value=name
                                on:input=move |ev| name.set(event_target_value(&ev))
                                required
                                class=field_class
                                placeholder="Your name"
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-muted text-xs mb-1">
                                "Email"
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                                required
                                class=field_class
                                placeholder="email@example.com"
                            />
                        </div>
                    </div>
                    <div>
                        <label for="subject" class="block text-muted text-xs mb-1">
                            "Subject"
                        </label>
                        <input
                            type="text"
                            id="subject"
                            name="subject"
                            prop:value=subject
                            on:input=move |ev| subject.set(event_target_value(&ev))
                            required
                            class=field_class
                            placeholder="What's this about?"
                        />
                    </div>
                    <div>
                        <label for="message" class="block text-muted text-xs mb-1">
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            name="message"
                            prop:value=message
                            on:input=move |ev| message.set(event_target_value(&ev))
                            required
                            rows=5
                            class=format!("{field_class} resize-vertical")
                            placeholder="Your message..."
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting()
                        class="w-full py-2 bg-white text-black text-sm rounded-md hover:bg-brightWhite transition-all flex items-center justify-center gap-2 disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {move || {
                            if submitting() {
                                Either::Left(
                                    view! {
                                        <div class="animate-spin rounded-full h-4 w-4 border-2 border-black border-t-transparent"></div>
                                        <span>"Sending..."</span>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <span>"Send Message"</span>
                                        <i class=Icon::Send.class()></i>
                                    },
                                )
                            }
                        }}
                    </button>
                    {move || match status() {
                        Some(Ok(())) => {
                            Some(
                                Either::Left(
                                    view! {
                                        <div class="p-3 rounded-md text-center text-xs bg-brightBlack/50 text-white border border-brightBlack">
                                            "Message sent successfully. I'll get back to you soon."
                                        </div>
                                    },
                                ),
                            )
                        }
                        Some(Err(err)) => {
                            Some(
                                Either::Right(
                                    view! {
                                        <div class="p-3 rounded-md text-center text-xs bg-brightBlack/50 text-red border border-red/50">
                                            {err.to_string()}
                                        </div>
                                    },
                                ),
                            )
                        }
                        _ => None,
                    }}
                </form>
            </div>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_fields() -> [RwSignal<String>; 4] {
        [
            RwSignal::new("Alice".to_string()),
            RwSignal::new("a@x.com".to_string()),
            RwSignal::new("Hi".to_string()),
            RwSignal::new("Hello".to_string()),
        ]
    }

    #[test]
    fn test_deliver_always_succeeds() {
        assert_eq!(deliver("Alice", "a@x.com", "Hi", "Hello"), Ok(()));
        assert_eq!(deliver("", "", "", ""), Ok(()));
    }

    #[test]
    fn test_success_clears_all_fields() {
        let owner = Owner::new();
        owner.set();
        let fields = filled_fields();
        let result = finish(fields, Ok(()));
        assert_eq!(result, Ok(()));
        for field in fields {
            assert_eq!(field.get_untracked(), "");
        }
    }

    #[test]
    fn test_failure_keeps_fields_for_retry() {
        let owner = Owner::new();
        owner.set();
        let fields = filled_fields();
        let result = finish(fields, Err(SubmitError::Transport));
        assert_eq!(result, Err(SubmitError::Transport));
        assert_eq!(fields[0].get_untracked(), "Alice");
        assert_eq!(fields[1].get_untracked(), "a@x.com");
        assert_eq!(fields[2].get_untracked(), "Hi");
        assert_eq!(fields[3].get_untracked(), "Hello");
    }

    #[test]
    fn test_stale_dismiss_cannot_reenable_submit() {
        // A dismissal left over from a previous attempt may fire while a
        // new submission is in flight; it only clears the status message
        // and leaves the in-flight flag untouched.
        let owner = Owner::new();
        owner.set();
        let submitting = RwSignal::new(true);
        let status = RwSignal::new(Some(Ok(())) as SubmitStatus);
        dismiss_status(status);
        assert_eq!(status.get_untracked(), None);
        assert!(submitting.get_untracked());
    }

    #[test]
    fn test_dismiss_clears_error_status_too() {
        let owner = Owner::new();
        owner.set();
        let status = RwSignal::new(Some(Err(SubmitError::Transport)) as SubmitStatus);
        dismiss_status(status);
        assert_eq!(status.get_untracked(), None);
    }
}
