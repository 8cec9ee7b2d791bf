//! Pointer-driven parallax tilt for the floating cards.
//!
//! The pointer position is normalised into the card's box as `px, py` in
//! `[-0.5, 0.5]` and mapped through fixed gains. Rotation about Y and the
//! horizontal shift are inverted so the card leans away from the cursor.

const ROTATE_X_GAIN: f64 = 12.0;
const ROTATE_Y_GAIN: f64 = 16.0;
const TRANSLATE_X_GAIN: f64 = 18.0;
const TRANSLATE_Y_GAIN: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A card that is hidden or not laid out yet has no usable box.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltOffsets {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

pub fn tilt_offsets(rect: CardRect, client_x: f64, client_y: f64) -> Option<TiltOffsets> {
    if rect.is_empty() {
        return None;
    }
    let px = (client_x - rect.left) / rect.width - 0.5;
    let py = (client_y - rect.top) / rect.height - 0.5;
    Some(TiltOffsets {
        rotate_x: py * ROTATE_X_GAIN,
        rotate_y: -px * ROTATE_Y_GAIN,
        translate_x: -px * TRANSLATE_X_GAIN,
        translate_y: -py * TRANSLATE_Y_GAIN,
    })
}

/// Idle float animation timing, staggered by the card's document position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatTiming {
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl FloatTiming {
    pub fn for_index(index: usize) -> Self {
        Self {
            duration_secs: 5.2 + (index % 4) as f64 * 0.7,
            delay_secs: (index % 6) as f64 * 0.35,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltState {
    offsets: TiltOffsets,
    active: bool,
}

impl TiltState {
    pub fn offsets(&self) -> TiltOffsets {
        self.offsets
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) {
        self.active = true;
    }

    /// Returns `false` when the card has no box and nothing changed.
    pub fn track(&mut self, rect: CardRect, client_x: f64, client_y: f64) -> bool {
        match tilt_offsets(rect, client_x, client_y) {
            Some(offsets) => {
                self.offsets = offsets;
                self.active = true;
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Inline style carrying the custom properties read by `.floating-card`.
    pub fn style(&self, timing: FloatTiming) -> String {
        let o = if self.active {
            self.offsets
        } else {
            TiltOffsets::default()
        };
        format!(
            "--rx: {}; --ry: {}; --tx: {}; --ty: {}; --float-duration: {}s; --float-delay: {}s",
            css_length(o.rotate_x, "deg"),
            css_length(o.rotate_y, "deg"),
            css_length(o.translate_x, "px"),
            css_length(o.translate_y, "px"),
            trim_float(timing.duration_secs),
            trim_float(timing.delay_secs),
        )
    }
}

fn css_length(value: f64, unit: &str) -> String {
    if value == 0.0 {
        format!("0{unit}")
    } else {
        format!("{value:.2}{unit}")
    }
}

fn trim_float(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Picks the point the tilt follows out of a multi-touch event.
pub fn first_touch<I>(touches: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    touches.into_iter().next()
}
