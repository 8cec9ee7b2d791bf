mod background;
mod canvas;
mod education;
mod header;
mod hero;
mod sections;
mod theme;
mod tilt;

use background::{NeonBooks, SceneBackground};
use education::EducationSection;
use header::Header;
use hero::Hero;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};
use sections::{
    AboutSection, ContactSection, ExperienceSection, Footer, ProjectsSection, ServicesSection,
};
use theme::provide_theme;
use tilt::CardSequence;

use crate::content::{portfolio, Portfolio};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    view! {
        <Html attr:data-theme=move || theme.get().as_str() />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => view! { <Landing portfolio /> }.into_any(),
        Err(e) => {
            log::error!("portfolio content unavailable: {e}");
            view! {
                <Title text="Portfolio" />
                <main class="content-error">
                    <p>"This page could not be loaded."</p>
                </main>
            }
            .into_any()
        }
    }
}

#[component]
fn Landing(portfolio: &'static Portfolio) -> impl IntoView {
    provide_context(CardSequence::default());

    let ready = RwSignal::new(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| ready.set(true),
        portfolio.effects.fade_in_delay_ms as f64,
    );
    Effect::new(move |_| start(()));

    let profile = &portfolio.profile;

    view! {
        <Title text=format!("{} - {}", profile.name, profile.title) />
        <Meta name="description" content=profile.summary.clone() />
        <div class="page" class:is-ready=move || ready.get()>
            <SceneBackground config=&portfolio.effects />
            <NeonBooks />
            <Header profile />
            <main>
                <Hero portfolio />
                <AboutSection about=&portfolio.about profile skills=&portfolio.skills />
                <ExperienceSection experience=&portfolio.experience />
                <EducationSection
                    education=&portfolio.education
                    certification=&portfolio.certification
                />
                <ServicesSection services=&portfolio.services profile />
                <ProjectsSection projects=&portfolio.projects profile />
                <ContactSection contact=&portfolio.contact profile />
            </main>
            <Footer portfolio />
        </div>
    }
}
