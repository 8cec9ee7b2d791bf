use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, PointerEvent, TouchEvent};

use crate::effects::tilt::{first_touch, CardRect, FloatTiming, TiltState};

/// Hands out document-order indices to cards as they are created.
#[derive(Debug, Clone, Default)]
pub struct CardSequence(Arc<AtomicUsize>);

impl CardSequence {
    pub fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

fn card_rect(ev: &Event) -> Option<CardRect> {
    let el = ev.current_target()?.dyn_into::<Element>().ok()?;
    let r = el.get_bounding_client_rect();
    Some(CardRect::new(r.left(), r.top(), r.width(), r.height()))
}

/// Tilt handlers and styling for one card.
#[derive(Debug, Clone, Copy)]
struct Tilt {
    state: RwSignal<TiltState>,
    timing: FloatTiming,
}

impl Tilt {
    fn new() -> Self {
        let index = use_context::<CardSequence>()
            .map(|seq| seq.next())
            .unwrap_or_default();
        Self {
            state: RwSignal::new(TiltState::default()),
            timing: FloatTiming::for_index(index),
        }
    }

    fn style(&self) -> String {
        let timing = self.timing;
        self.state.with(|s| s.style(timing))
    }

    fn tilting(&self) -> Option<&'static str> {
        self.state.with(|s| s.is_active().then_some("true"))
    }

    fn enter(&self) {
        self.state.update(TiltState::enter);
    }

    fn leave(&self) {
        self.state.update(TiltState::reset);
    }

    fn pointer_move(&self, ev: &PointerEvent) {
        if let Some(rect) = card_rect(ev) {
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            self.state.update(|s| {
                s.track(rect, x, y);
            });
        }
    }

    fn touch(&self, ev: &TouchEvent) {
        let touches = ev.touches();
        let points = (0..touches.length())
            .filter_map(|i| touches.get(i))
            .map(|t| (t.client_x() as f64, t.client_y() as f64));
        let (Some((x, y)), Some(rect)) = (first_touch(points), card_rect(ev)) else {
            return;
        };
        self.state.update(|s| {
            s.track(rect, x, y);
        });
    }
}

#[component]
pub fn TiltCard(
    #[prop(into)] class: String,
    /// Cards wrapping their own link should not add an extra tab stop.
    #[prop(default = true)]
    focusable: bool,
    children: Children,
) -> impl IntoView {
    let tilt = Tilt::new();
    view! {
        <div
            class=format!("floating-card {class}")
            tabindex=focusable.then_some("0")
            style=move || tilt.style()
            data-tilting=move || tilt.tilting()
            on:pointerenter=move |_| tilt.enter()
            on:pointermove=move |ev| tilt.pointer_move(&ev)
            on:pointerleave=move |_| tilt.leave()
            on:touchstart=move |ev| tilt.touch(&ev)
            on:touchmove=move |ev| tilt.touch(&ev)
            on:touchend=move |_| tilt.leave()
            on:touchcancel=move |_| tilt.leave()
        >
            {children()}
        </div>
    }
}
