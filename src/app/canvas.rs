use std::f64::consts::TAU;

use leptos::{ev::resize, html, prelude::*};
use leptos_use::{
    use_event_listener, use_raf_fn_with_options, use_window, utils::Pausable, UseRafFnOptions,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::effects::{
    particles::ParticleField,
    scene::Scene,
    scheduler::FrameScheduler,
    surface::{Point, Segment, Surface},
};

/// Frame loop handle over `use_raf_fn`. Created paused, and paused again when
/// the owning component is cleaned up.
#[derive(Clone)]
pub struct AnimationLoop<P, R> {
    pause: P,
    resume: R,
    is_active: Signal<bool>,
}

pub fn use_animation_loop(
    on_frame: impl Fn() + 'static,
) -> AnimationLoop<impl Fn() + Clone + Send + Sync, impl Fn() + Clone + Send + Sync> {
    let Pausable {
        pause,
        resume,
        is_active,
    } = use_raf_fn_with_options(
        move |_| on_frame(),
        UseRafFnOptions::default().immediate(false),
    );
    AnimationLoop {
        pause,
        resume,
        is_active,
    }
}

impl<P, R> FrameScheduler for AnimationLoop<P, R>
where
    P: Fn() + Clone + Send + Sync,
    R: Fn() + Clone + Send + Sync,
{
    fn start(&self) {
        (self.resume)();
    }

    fn stop(&self) {
        (self.pause)();
    }

    fn is_running(&self) -> bool {
        self.is_active.get_untracked()
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ctx.begin_path();
        if self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_segments(&mut self, segments: &[Segment], color: &str) {
        self.ctx.begin_path();
        for (a, b) in segments {
            self.ctx.move_to(a.x, a.y);
            self.ctx.line_to(b.x, b.y);
        }
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(1.0);
        self.ctx.stroke();
    }
}

/// Renderers that follow the canvas size.
pub trait Resize {
    fn resize(&mut self, width: f64, height: f64);
}

impl Resize for ParticleField {
    fn resize(&mut self, width: f64, height: f64) {
        ParticleField::resize(self, width, height);
    }
}

impl Resize for Scene {
    fn resize(&mut self, width: f64, height: f64) {
        Scene::resize(self, width, height);
    }
}

fn viewport_size() -> (f64, f64) {
    let window = window();
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (px(window.inner_width()).floor(), px(window.inner_height()).floor())
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

struct Running<R, F> {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    renderer: R,
    frame: F,
}

/// Animates a full-viewport canvas once it is mounted.
///
/// `build` gets the initial canvas size and may return `None` to leave the
/// canvas blank. The canvas buffer tracks window resizes, and the frame loop
/// is stopped when the calling component is cleaned up.
pub fn use_canvas_animation<R, B, F>(canvas_ref: NodeRef<html::Canvas>, build: B, frame: F)
where
    R: Resize + 'static,
    B: FnOnce(f64, f64) -> Option<R> + 'static,
    F: FnMut(&mut R, &mut CanvasSurface) + 'static,
{
    let running = StoredValue::new_local(None::<Running<R, F>>);
    let frames = use_animation_loop(move || {
        running.update_value(|running| {
            if let Some(r) = running {
                (r.frame)(&mut r.renderer, &mut r.surface);
            }
        });
    });
    let mut pending = Some((build, frame));

    let starter = frames.clone();
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some((build, frame)) = pending.take() else {
            return;
        };
        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::warn!("no 2d context for canvas, skipping animation");
            return;
        };
        let (width, height) = fit_to_viewport(&canvas);
        let Some(renderer) = build(width, height) else {
            return;
        };
        running.set_value(Some(Running {
            canvas,
            surface,
            renderer,
            frame,
        }));
        starter.start();
    });

    let _ = use_event_listener(use_window(), resize, move |_| {
        running.update_value(|running| {
            if let Some(r) = running {
                let (width, height) = fit_to_viewport(&r.canvas);
                r.renderer.resize(width, height);
            }
        });
    });

    on_cleanup(move || {
        frames.stop();
        running.try_update_value(|running| running.take());
    });
}
