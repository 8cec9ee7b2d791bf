use fastrand::Rng;
use leptos::{html, prelude::*};

use super::canvas::{use_canvas_animation, CanvasSurface};
use super::theme::use_theme;
use crate::content::EffectsConfig;
use crate::effects::{particles::ParticleField, scene::Scene};

#[component]
pub fn ParticleCanvas(count: usize) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    use_canvas_animation(
        canvas_ref,
        move |width, height| Some(ParticleField::new(count, width, height, &mut Rng::new())),
        |field: &mut ParticleField, surface: &mut CanvasSurface| field.frame(surface),
    );
    view! { <canvas node_ref=canvas_ref id="particle-canvas" class="particle-canvas"></canvas> }
}

/// Wireframe shapes behind the whole page, only on wide viewports.
#[component]
pub fn SceneBackground(config: &'static EffectsConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let theme = use_theme();
    let (shapes, min_width) = (config.scene_shapes, config.scene_min_width);
    use_canvas_animation(
        canvas_ref,
        move |width, height| {
            (width > min_width).then(|| Scene::new(shapes, width, height, &mut Rng::new()))
        },
        move |scene: &mut Scene, surface: &mut CanvasSurface| {
            scene.frame(surface, theme.get_untracked())
        },
    );
    view! {
        <div class="three-container" aria-hidden="true">
            <canvas node_ref=canvas_ref class="scene-canvas"></canvas>
        </div>
    }
}

const NEON_BOOKS: [(&str, &str, &str, &str, &str); 8] = [
    ("6%", "44px", "0s", "20s", "0deg"),
    ("18%", "52px", "-3s", "22s", "35deg"),
    ("31%", "46px", "-6s", "19s", "65deg"),
    ("44%", "58px", "-8s", "24s", "95deg"),
    ("57%", "42px", "-10s", "21s", "130deg"),
    ("70%", "54px", "-12s", "23s", "180deg"),
    ("82%", "47px", "-5s", "20s", "230deg"),
    ("92%", "50px", "-9s", "25s", "280deg"),
];

/// CSS-only drifting books layered under the content.
#[component]
pub fn NeonBooks() -> impl IntoView {
    view! {
        <div class="neon-books-bg" aria-hidden="true">
            {NEON_BOOKS
                .iter()
                .map(|(x, size, delay, duration, hue)| {
                    let style = format!(
                        "--x: {x}; --size: {size}; --delay: {delay}; --duration: {duration}; --hue: {hue}",
                    );
                    view! { <span class="neon-book" style=style></span> }
                })
                .collect_view()}
        </div>
    }
}
