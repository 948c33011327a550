//! Contact section: obfuscated direct details plus the guarded message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! All decisions live in `state::contact::ContactState`; this component feeds
//! it input events, forwards accepted payloads to the relay, and arms the
//! status reset timer.
//!
//! DESIGN
//! ======
//! The dwell clock and the decoded email/phone both start on the client after
//! hydration. The server-rendered markup therefore never carries the plain
//! contact details, and a page that sat in a cache does not count as dwell.

use leptos::prelude::*;

use crate::app::use_language;
use crate::config::SiteConfig;
use crate::i18n::t;
use crate::net::api::HttpRelay;
use crate::state::contact::{ContactState, SubmitDecision};
use crate::state::language::Language;
use crate::util::obfuscate::{self, EmailKind};
use crate::util::timer::{Debouncer, now_ms};
use crate::util::validation::Field;

/// Arm the return to `Idle` for whatever terminal status `state` is in.
fn schedule_reset(reset: &Debouncer, state: RwSignal<ContactState>) {
    if let Some(delay) = state.with_untracked(|s| s.status.reset_delay_ms()) {
        reset.schedule(delay, move || state.update(ContactState::reset_status));
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let lang = use_language();
    let config = expect_context::<SiteConfig>();
    let relay = HttpRelay::new(config.relay_endpoint);
    let state = RwSignal::new(ContactState::new(now_ms()));
    let reset = Debouncer::new();
    let revealed = RwSignal::new(false);

    Effect::new(move || {
        state.update_untracked(|s| s.rendered_at_ms = now_ms());
        revealed.set(true);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(decision) = state.try_update(|s| s.begin_submit(now_ms())) else {
            return;
        };
        match decision {
            SubmitDecision::Forward(payload) => {
                #[cfg(feature = "hydrate")]
                {
                    use crate::net::api::ContactRelay;

                    let relay = relay.clone();
                    let reset = reset.clone();
                    leptos::task::spawn_local(async move {
                        let result = relay.forward(&payload).await;
                        state.update(|s| s.finish_submit(&result));
                        schedule_reset(&reset, state);
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (&relay, payload);
                }
            }
            SubmitDecision::Absorbed(_) => schedule_reset(&reset, state),
            SubmitDecision::Busy | SubmitDecision::Invalid => {}
        }
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">{move || t(lang.get(), "contact.title")}</h2>
            <p class="contact__subtitle">{move || t(lang.get(), "contact.subtitle")}</p>

            <div class="contact__layout">
                <DirectDetails lang=lang revealed=revealed/>

                <form class="contact-form" on:submit=on_submit novalidate>
                    <FormField state=state lang=lang field=Field::Name label="contact.form.name" kind="text"/>
                    <FormField state=state lang=lang field=Field::Email label="contact.form.email" kind="email"/>

                    <label class="contact-form__field">
                        <span>{move || t(lang.get(), "contact.form.message")}</span>
                        <textarea
                            rows="5"
                            placeholder=move || t(lang.get(), "contact.form.message_placeholder")
                            prop:value=move || state.with(|s| s.form.message.clone())
                            on:input=move |ev| state.update(|s| s.edit(Field::Message, event_target_value(&ev)))
                        ></textarea>
                        <FieldErrorLine state=state lang=lang field=Field::Message/>
                    </label>

                    <div class="contact-form__trap" aria-hidden="true">
                        <label>
                            {move || t(lang.get(), "contact.form.website")}
                            <input
                                type="text"
                                name="website"
                                tabindex="-1"
                                autocomplete="off"
                                prop:value=move || state.with(|s| s.form.honeypot.clone())
                                on:input=move |ev| state.update(|s| s.set_honeypot(event_target_value(&ev)))
                            />
                        </label>
                    </div>

                    <button
                        type="submit"
                        class="btn btn--primary contact-form__submit"
                        disabled=move || state.with(ContactState::is_sending)
                    >
                        {move || {
                            let key = if state.with(ContactState::is_sending) {
                                "contact.form.sending"
                            } else {
                                "contact.form.send"
                            };
                            t(lang.get(), key)
                        }}
                    </button>

                    <StatusLine state=state lang=lang/>
                </form>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    state: RwSignal<ContactState>,
    lang: Signal<Language>,
    field: Field,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let value = move || {
        state.with(|s| match field {
            Field::Name => s.form.name.clone(),
            Field::Email => s.form.email.clone(),
            Field::Message => s.form.message.clone(),
        })
    };

    view! {
        <label class="contact-form__field">
            <span>{move || t(lang.get(), label)}</span>
            <input
                type=kind
                class:contact-form__input--invalid=move || state.with(|s| s.errors.get(field).is_some())
                prop:value=value
                on:input=move |ev| state.update(|s| s.edit(field, event_target_value(&ev)))
            />
            <FieldErrorLine state=state lang=lang field=field/>
        </label>
    }
}

#[component]
fn FieldErrorLine(state: RwSignal<ContactState>, lang: Signal<Language>, field: Field) -> impl IntoView {
    move || {
        state
            .with(|s| s.errors.get(field))
            .map(|error| view! { <p class="contact-form__error">{t(lang.get(), error.i18n_key())}</p> })
    }
}

#[component]
fn StatusLine(state: RwSignal<ContactState>, lang: Signal<Language>) -> impl IntoView {
    use crate::state::contact::SubmitStatus;

    move || {
        let (modifier, key) = match state.with(|s| s.status) {
            SubmitStatus::Success => ("contact-form__status--ok", "contact.form.success"),
            SubmitStatus::Error => ("contact-form__status--err", "contact.form.error"),
            SubmitStatus::Idle | SubmitStatus::Sending => return None,
        };
        Some(view! { <p class=format!("contact-form__status {modifier}")>{t(lang.get(), key)}</p> })
    }
}

#[component]
fn DirectDetails(lang: Signal<Language>, revealed: RwSignal<bool>) -> impl IntoView {
    view! {
        <ul class="contact__details">
            <Show when=move || revealed.get() fallback=|| view! { <li class="contact__placeholder">"…"</li> }>
                <li>
                    <span class="contact__label">{move || t(lang.get(), "contact.email")}</span>
                    <a href=obfuscate::mailto_link(EmailKind::Personal)>{obfuscate::email(EmailKind::Personal)}</a>
                </li>
                <li>
                    <span class="contact__label">{move || t(lang.get(), "contact.email_pro")}</span>
                    <a href=obfuscate::mailto_link(EmailKind::Work)>{obfuscate::email(EmailKind::Work)}</a>
                </li>
                <li>
                    <span class="contact__label">{move || t(lang.get(), "contact.phone")}</span>
                    <a href=obfuscate::tel_link()>{obfuscate::phone()}</a>
                </li>
            </Show>
        </ul>
    }
}
