use leptos::prelude::*;
use web_sys::MouseEvent;

use super::theme::ThemeToggle;
use crate::content::Profile;

const NAV_LINKS: [(&str, &str); 6] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#education", "Education"),
    ("#projects", "Projects"),
    ("#services", "Services"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header(profile: &'static Profile) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = move |_: MouseEvent| menu_open.set(false);

    view! {
        <header>
            <div class="container header-content">
                <a href="#" class="logo">
                    <div class="logo-icon">{profile.initials.clone()}</div>
                    <div class="logo-text">
                        <div class="logo-name">{profile.name.clone()}</div>
                        <div class="logo-title">{profile.title.clone()}</div>
                    </div>
                </a>
                <nav class:nav-open=move || menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="header-actions">
                    <ThemeToggle />
                    <a
                        href=profile.whatsapp_link(None)
                        target="_blank"
                        rel="noopener noreferrer"
                        class="whatsapp-btn"
                        title="Contact via WhatsApp"
                    >
                        <i class="fa-brands fa-whatsapp"></i>
                    </a>
                    <a href="#contact" class="hire-btn">
                        <i class="fa-brands fa-whatsapp"></i>
                        " Hire Me"
                    </a>
                    <button
                        class="mobile-menu-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if menu_open.get() { "fa-solid fa-xmark" } else { "fa-solid fa-bars" }
                        }></i>
                    </button>
                </div>
            </div>
        </header>
    }
}
