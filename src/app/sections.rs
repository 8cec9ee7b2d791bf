use leptos::prelude::*;

use super::tilt::TiltCard;
use crate::content::{About, Contact, Entry, Link, Portfolio, Profile, Project, Service, Skill};

pub(super) fn links(links: &'static [Link]) -> impl IntoView {
    links
        .iter()
        .map(|link| {
            view! {
                <a href=link.href.clone() target="_blank" rel="noopener noreferrer">
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view()
}

/// Stagger class for the `index`th card in a group. The first card has none
/// and the delay stops growing at 600ms.
pub(super) fn fade_delay(index: usize) -> &'static str {
    const DELAYS: [&str; 7] = [
        "",
        "delay-100",
        "delay-200",
        "delay-300",
        "delay-400",
        "delay-500",
        "delay-600",
    ];
    DELAYS[index.min(DELAYS.len() - 1)]
}

pub(super) fn entry_card(index: usize, entry: &'static Entry) -> impl IntoView {
    view! {
        <TiltCard class=format!("timeline-item fade-in {}", fade_delay(index))>
            <div class="timeline-header">
                <h3>{entry.title.clone()}</h3>
                <span class="timeline-dates">{entry.dates.clone()}</span>
            </div>
            <div class="timeline-org">
                {entry.organization.clone()}
                " • "
                {entry.location.clone()}
            </div>
            <ul>
                {entry.points.iter().map(|p| view! { <li>{p.clone()}</li> }).collect_view()}
            </ul>
            <div class="timeline-links">{links(&entry.links)}</div>
        </TiltCard>
    }
}

fn skill_bar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="skill">
            <div class="skill-label">
                <span>{skill.name.clone()}</span>
                <span>{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-bar">
                <div class="skill-progress" style=format!("width: {}%", skill.level)></div>
            </div>
        </div>
    }
}

#[component]
pub fn AboutSection(
    about: &'static About,
    profile: &'static Profile,
    skills: &'static [Skill],
) -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <h2 class="section-title fade-in">"About Me"</h2>
                <div class="about-grid">
                    <div class="about-photo fade-in">
                        <img src=profile.photo.clone() alt=profile.name.clone() />
                    </div>
                    <div class="about-text fade-in">
                        <h3>{about.heading.clone()}</h3>
                        <p class="about-tagline">{about.tagline.clone()}</p>
                        {about
                            .paragraphs
                            .iter()
                            .map(|p| view! { <p>{p.clone()}</p> })
                            .collect_view()}
                        <div class="social-links">
                            <a
                                href=profile.github_url()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub"
                            >
                                <i class="fa-brands fa-github"></i>
                            </a>
                            <a
                                href=profile.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn"
                            >
                                <i class="fa-brands fa-linkedin"></i>
                            </a>
                            <a
                                href=profile.whatsapp_link(None)
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="WhatsApp"
                            >
                                <i class="fa-brands fa-whatsapp"></i>
                            </a>
                        </div>
                    </div>
                </div>
                <div class="skills fade-in">
                    <h3>"Technical Skills"</h3>
                    {skills.iter().map(skill_bar).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(experience: &'static [Entry]) -> impl IntoView {
    view! {
        <section id="experience" class="section">
            <div class="container">
                <h2 class="section-title fade-in">"Experience"</h2>
                <div class="timeline">
                    {experience
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| entry_card(i, entry))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn service_card(
    index: usize,
    service: &'static Service,
    profile: &'static Profile,
) -> impl IntoView {
    view! {
        <TiltCard class=format!("service-card fade-in {}", fade_delay(index))>
            <div class="service-icon">
                <i class=service.icon.clone()></i>
            </div>
            <h3>{service.title.clone()}</h3>
            <p>{service.description.clone()}</p>
            <ul class="service-features">
                {service
                    .features
                    .iter()
                    .map(|f| {
                        view! {
                            <li>
                                <i class="fa-solid fa-check"></i>
                                " "
                                {f.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a
                href=profile.whatsapp_link(Some(&service.enquiry))
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-outline"
            >
                "Get Started"
            </a>
        </TiltCard>
    }
}

#[component]
pub fn ServicesSection(services: &'static [Service], profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container">
                <h2 class="section-title fade-in">"Services"</h2>
                <div class="services-grid">
                    {services
                        .iter()
                        .enumerate()
                        .map(|(i, s)| service_card(i, s, profile))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

fn project_card(
    index: usize,
    project: &'static Project,
    profile: &'static Profile,
) -> impl IntoView {
    view! {
        <TiltCard class=format!("project-card fade-in {}", fade_delay(index))>
            <div class="project-header">
                <span class="project-category">{project.category.clone()}</span>
                <span class=format!("project-status {}", project.status.class())>
                    {project.status.label()}
                </span>
            </div>
            <h3>{project.title.clone()}</h3>
            <p class="project-subtitle">{project.subtitle.clone()}</p>
            <p>{project.description.clone()}</p>
            <div class="tech-tags">
                {project
                    .tech
                    .iter()
                    .map(|t| view! { <span class="tech-tag">{t.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="project-links">
                <a href=project.repo.clone() target="_blank" rel="noopener noreferrer">
                    <i class="fa-brands fa-github"></i>
                    " Code"
                </a>
                <a
                    href=profile.whatsapp_link(Some(&project.enquiry()))
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="fa-brands fa-whatsapp"></i>
                    " Discuss"
                </a>
            </div>
        </TiltCard>
    }
}

#[component]
pub fn ProjectsSection(projects: &'static [Project], profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <h2 class="section-title fade-in">"Featured Projects"</h2>
                <div class="projects-grid">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(i, p)| project_card(i, p, profile))
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Contact card that is itself a link, so the card adds no tab stop.
fn contact_card(
    index: usize,
    href: String,
    icon: &'static str,
    title: &'static str,
    detail: String,
) -> impl IntoView {
    view! {
        <TiltCard
            class=format!("contact-card fade-in {}", fade_delay(index))
            focusable=false
        >
            <a href=href target="_blank" rel="noopener noreferrer">
                <i class=icon></i>
                <h3>{title}</h3>
                <p>{detail}</p>
            </a>
        </TiltCard>
    }
}

#[component]
pub fn ContactSection(contact: &'static Contact, profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <div class="container">
                <h2 class="section-title fade-in">{contact.heading.clone()}</h2>
                <p class="section-description fade-in">{contact.description.clone()}</p>
                <div class="contact-grid">
                    {contact_card(
                        0,
                        profile.whatsapp_link(Some(&contact.whatsapp_message)),
                        "fa-brands fa-whatsapp",
                        "WhatsApp",
                        profile.phone.clone(),
                    )}
                    {contact_card(
                        1,
                        profile.mailto(&contact.email_subject, &contact.email_body),
                        "fa-solid fa-envelope",
                        "Email",
                        profile.email.clone(),
                    )}
                    {contact_card(
                        2,
                        profile.github_url(),
                        "fa-brands fa-github",
                        "GitHub",
                        format!("@{}", profile.github),
                    )}
                    {contact_card(
                        3,
                        profile.linkedin.clone(),
                        "fa-brands fa-linkedin",
                        "LinkedIn",
                        profile.name.clone(),
                    )}
                </div>
                <div class="cta fade-in">
                    <h3>{contact.cta_title.clone()}</h3>
                    <p>{contact.cta_description.clone()}</p>
                    <div class="cta-actions">
                        <a
                            href=profile.whatsapp_link(Some(&contact.quote_message))
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            <i class="fa-brands fa-whatsapp"></i>
                            " Get a Quote"
                        </a>
                        <a
                            href=profile.mailto(&contact.call_subject, &contact.call_body)
                            class="btn btn-secondary"
                        >
                            <i class="fa-solid fa-calendar"></i>
                            " Schedule a Call"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    view! {
        <footer>
            <div class="container footer-content">
                <p>
                    {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), profile.name)}
                </p>
                <p class="footer-tagline">{profile.title.clone()}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tilt::CardSequence;
    use crate::content::portfolio;

    /// Renders `view` and returns how many floating cards it created.
    fn floating_cards<V: RenderHtml>(view: impl FnOnce() -> V) -> usize {
        let owner = Owner::new();
        owner.with(|| {
            let sequence = CardSequence::default();
            provide_context(sequence.clone());
            assert!(!view().to_html().is_empty());
            sequence.next()
        })
    }

    #[test]
    fn only_floating_cards_take_a_stagger_slot() {
        let p = portfolio().expect("embedded content should parse");
        let profile = &p.profile;

        let about = floating_cards(|| {
            view! { <AboutSection about=&p.about profile skills=&p.skills /> }
        });
        assert_eq!(about, 0);
        assert_eq!(
            floating_cards(|| view! { <ContactSection contact=&p.contact profile /> }),
            4
        );
        assert_eq!(
            floating_cards(|| view! { <ServicesSection services=&p.services profile /> }),
            p.services.len()
        );
    }

    #[test]
    fn fade_delays_step_by_100ms_and_cap() {
        assert_eq!(fade_delay(0), "");
        assert_eq!(fade_delay(1), "delay-100");
        assert_eq!(fade_delay(4), "delay-400");
        assert_eq!(fade_delay(6), "delay-600");
        assert_eq!(fade_delay(9), "delay-600");
    }
}
