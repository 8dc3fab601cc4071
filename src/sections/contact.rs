use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::models::profile::{CONTACT_DETAILS, SOCIAL_LINKS};
use crate::models::ContactForm;
use crate::server_fns::SubmitContact;

const SUCCESS_VISIBLE_FOR: Duration = Duration::from_secs(3);
const CONTACT_PARTICLES: usize = 15;

#[component]
pub fn Contact() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);
    let (show_success, set_show_success) = signal(false);

    // Clear the form and flash the confirmation after a successful send
    Effect::new(move |_| {
        if let Some(Ok(())) = submit.value().get() {
            set_name.set(String::new());
            set_email.set(String::new());
            set_subject.set(String::new());
            set_message.set(String::new());
            set_show_success.set(true);
            set_timeout(move || set_show_success.set(false), SUCCESS_VISIBLE_FOR);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            subject.get_untracked(),
            message.get_untracked(),
        );
        if let Err(e) = form.validate() {
            set_local_error.set(Some(e.to_string()));
            return;
        }
        set_local_error.set(None);
        submit.dispatch(SubmitContact {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        });
    };

    let error_text = move || {
        let server = match submit.value().get() {
            Some(Err(e)) => Some(e.to_string()),
            _ => None,
        };
        form_error(local_error.get(), submit.pending().get(), server)
    };

    view! {
        <div class="contact">
            {(0..CONTACT_PARTICLES)
                .map(|i| {
                    let style = format!(
                        "left: {:.0}%; top: {:.0}%; animation-delay: {:.1}s",
                        (i * 37 % 100) as f64,
                        (i * 53 % 100) as f64,
                        (i % 6) as f64,
                    );
                    view! { <div class="contact-particle" style=style></div> }
                })
                .collect_view()}

            <div class="container stagger">
                <header class="section-header">
                    <h2 class="text-gradient">"Get In Touch"</h2>
                    <p>"Ready to start your next project? Let's create something amazing together!"</p>
                    <div class="rule"></div>
                </header>

                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>"Send Message"</h3>
                        <form on:submit=on_submit novalidate>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="contact-name">"Your Name"</label>
                                    <input
                                        type="text"
                                        id="contact-name"
                                        name="name"
                                        required
                                        prop:value=name
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="contact-email">"Email Address"</label>
                                    <input
                                        type="email"
                                        id="contact-email"
                                        name="email"
                                        required
                                        prop:value=email
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <div class="form-field">
                                <label for="contact-subject">"Subject"</label>
                                <input
                                    type="text"
                                    id="contact-subject"
                                    name="subject"
                                    required
                                    prop:value=subject
                                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                                />
                            </div>

                            <div class="form-field">
                                <label for="contact-message">"Your Message"</label>
                                <textarea
                                    id="contact-message"
                                    name="message"
                                    rows="6"
                                    required
                                    prop:value=message
                                    on:input=move |ev| set_message.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <button type="submit" class="btn btn-primary" disabled=move || submit.pending().get()>
                                {move || if submit.pending().get() { "Sending..." } else { "Send Message" }}
                            </button>

                            {move || error_text().map(|e| view! { <p class="error">{e}</p> })}
                        </form>

                        <div class=move || if show_success.get() { "success-message visible" } else { "success-message" }>
                            "Message sent successfully! I'll get back to you soon."
                        </div>
                    </div>

                    <div class="contact-aside">
                        <div class="contact-card">
                            <h3>"Let's Connect"</h3>
                            {CONTACT_DETAILS
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <div class="contact-detail">
                                            <div class="detail-label">{detail.label}</div>
                                            {match detail.href {
                                                Some(href) => view! { <a href=href>{detail.value}</a> }.into_any(),
                                                None => view! { <span>{detail.value}</span> }.into_any(),
                                            }}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="contact-card">
                            <h3>"Follow Me"</h3>
                            <div class="social-row">
                                {SOCIAL_LINKS
                                    .iter()
                                    .enumerate()
                                    .map(|(i, link)| {
                                        view! {
                                            <a
                                                href=link.url
                                                class=format!("social-icon bg-gradient-to-r {}", link.gradient)
                                                style=format!("animation-delay: {:.1}s", i as f64 * 0.3)
                                                aria-label=link.name
                                            >
                                                {link.glyph}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Message under the form. Local validation wins; the last server error is
/// held back while a new submission is in flight.
fn form_error(local: Option<String>, pending: bool, server: Option<String>) -> Option<String> {
    local.or(if pending { None } else { server })
}
