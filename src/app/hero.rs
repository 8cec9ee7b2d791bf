use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::{background::ParticleCanvas, tilt::TiltCard};
use crate::content::Portfolio;
use crate::effects::typewriter::Typewriter;

/// Hero subtitle revealed one character per tick.
#[component]
fn TypedTitle(text: String, delay_ms: u64) -> impl IntoView {
    let typed = RwSignal::new(Typewriter::new(text));
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            typed.update(|t| {
                t.tick();
            })
        },
        delay_ms as f64,
    );

    // re-arms after every reveal until the whole string is shown
    Effect::new(move |_| {
        if !typed.with(Typewriter::is_done) {
            start(());
        }
    });

    view! {
        <h2 class="hero-subtitle">
            <span class="typing-text">{move || typed.with(|t| t.text().to_owned())}</span>
            <span class="typing-cursor" aria-hidden="true">"|"</span>
        </h2>
    }
}

#[component]
pub fn Hero(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    let effects = &portfolio.effects;
    let whatsapp = profile.whatsapp_link(Some(&portfolio.contact.whatsapp_message));

    view! {
        <section class="hero" id="home">
            <ParticleCanvas count=effects.particle_count />
            <div class="container hero-content">
                <div class="hero-text fade-in">
                    <div class="hero-availability">
                        <i class="fa-solid fa-circle-check"></i>
                        " "
                        {profile.availability.clone()}
                    </div>
                    <h1 class="hero-title">{profile.name.clone()}</h1>
                    <TypedTitle text=profile.title.clone() delay_ms=effects.typing_delay_ms />
                    <p class="hero-description">{profile.summary.clone()}</p>
                    <div class="hero-actions">
                        <a href="#projects" class="btn btn-primary">
                            <i class="fa-solid fa-briefcase"></i>
                            " View My Work"
                        </a>
                        <a
                            href=whatsapp
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-secondary"
                        >
                            <i class="fa-brands fa-whatsapp"></i>
                            " Let's Talk"
                        </a>
                        <a
                            href=profile.cv.href.clone()
                            download=profile.cv.filename.clone()
                            class="btn btn-outline"
                        >
                            <i class="fa-solid fa-download"></i>
                            " Download CV"
                        </a>
                    </div>
                    <div class="hero-contact">
                        <a href=profile.tel_link()>
                            <i class="fa-solid fa-phone"></i>
                            " "
                            {profile.phone.clone()}
                        </a>
                        <a href=format!("mailto:{}", profile.email)>
                            <i class="fa-solid fa-envelope"></i>
                            " "
                            {profile.email.clone()}
                        </a>
                        <span>
                            <i class="fa-solid fa-location-dot"></i>
                            " "
                            {profile.location.clone()}
                        </span>
                    </div>
                </div>
                <div class="hero-visual fade-in delay-200">
                    <TiltCard class="hero-card">
                        <div class="hero-card-header">
                            <div class="logo-icon">{profile.initials.clone()}</div>
                            <div>
                                <div class="hero-card-name">{profile.name.clone()}</div>
                                <div class="hero-card-title">{profile.title.clone()}</div>
                            </div>
                        </div>
                        <div class="tech-tags">
                            {portfolio
                                .skills
                                .iter()
                                .map(|skill| {
                                    view! { <span class="tech-tag">{skill.name.clone()}</span> }
                                })
                                .collect_view()}
                        </div>
                    </TiltCard>
                </div>
            </div>
        </section>
    }
}
