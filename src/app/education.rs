use leptos::{ev::keydown, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use super::sections::{entry_card, fade_delay, links};
use super::tilt::TiltCard;
use crate::content::{Certification, Entry};
use crate::effects::modal::{opens_with, ModalEvent, ModalState};

fn dispatch(modal: RwSignal<ModalState>, ev: ModalEvent<'_>) {
    let next = modal.get_untracked().next(ev);
    if next != modal.get_untracked() {
        modal.set(next);
    }
}

fn clicked_link(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

#[component]
fn CertificateModal(
    certification: &'static Certification,
    modal: RwSignal<ModalState>,
) -> impl IntoView {
    // only mounted while open, so the listener goes away on close
    let _ = use_event_listener(use_document(), keydown, move |ev: KeyboardEvent| {
        dispatch(modal, ModalEvent::Key(&ev.key()));
    });

    view! {
        <div
            class="certificate-modal"
            role="dialog"
            aria-modal="true"
            aria-label=certification.title.clone()
            on:click=move |_| dispatch(modal, ModalEvent::OverlayClick)
        >
            <div class="certificate-modal-content" on:click=|ev| ev.stop_propagation()>
                <button
                    class="certificate-modal-close"
                    aria-label="Close certificate"
                    on:click=move |_| dispatch(modal, ModalEvent::CloseClick)
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <img src=certification.image.clone() alt=certification.title.clone() />
            </div>
        </div>
    }
}

#[component]
fn CertificationCard(certification: &'static Certification, delay: &'static str) -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());

    let on_click = move |ev: MouseEvent| {
        dispatch(modal, ModalEvent::TriggerClick { on_link: clicked_link(&ev) });
    };
    let on_key = move |ev: KeyboardEvent| {
        let key = ev.key();
        if opens_with(&key) {
            ev.prevent_default();
        }
        dispatch(modal, ModalEvent::TriggerKey(&key));
    };

    view! {
        <TiltCard
            class=format!("timeline-item certificate-card fade-in {delay}")
            attr:role="button"
            attr:aria-haspopup="dialog"
            on:click=on_click
            on:keydown=on_key
        >
            <div class="timeline-header">
                <h3>{certification.title.clone()}</h3>
            </div>
            <div class="timeline-org">{certification.institute.clone()}</div>
            <p class="certificate-note">{certification.note.clone()}</p>
            <ul>
                {certification
                    .points
                    .iter()
                    .map(|p| view! { <li>{p.clone()}</li> })
                    .collect_view()}
            </ul>
            <div class="timeline-links">{links(&certification.links)}</div>
            <span class="certificate-hint">
                <i class="fa-solid fa-magnifying-glass"></i>
                " View certificate"
            </span>
        </TiltCard>
        <Show when=move || modal.get().is_open()>
            <CertificateModal certification modal />
        </Show>
    }
}

#[component]
pub fn EducationSection(
    education: &'static [Entry],
    certification: &'static Certification,
) -> impl IntoView {
    view! {
        <section id="education" class="section">
            <div class="container">
                <h2 class="section-title fade-in">"Education & Certification"</h2>
                <div class="timeline">
                    {education
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| entry_card(i, entry))
                        .collect_view()}
                    <CertificationCard certification delay=fade_delay(education.len()) />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::portfolio;

    #[test]
    fn certificate_card_is_a_focusable_floating_button() {
        let p = portfolio().expect("embedded content should parse");
        let owner = Owner::new();
        let html = owner.with(|| {
            view! { <CertificationCard certification=&p.certification delay="delay-200" /> }
                .to_html()
        });

        assert!(html.contains("floating-card timeline-item certificate-card fade-in delay-200"));
        assert!(html.contains(r#"role="button""#));
        assert!(html.contains(r#"aria-haspopup="dialog""#));
        assert!(html.contains(r#"tabindex="0""#));
        // the modal is only mounted once opened
        assert!(!html.contains("certificate-modal"));
    }
}
