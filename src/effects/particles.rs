//! Ambient particle field drawn behind the hero section.

use fastrand::Rng;

use super::surface::{Point, Surface};

pub const DEFAULT_PARTICLE_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    fn random(rng: &mut Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            radius: rng.f64() * 3.0 + 1.0,
            dx: rng.f64() * 2.0 - 1.0,
            dy: rng.f64() * 2.0 - 1.0,
            opacity: rng.f64() * 0.5 + 0.2,
        }
    }

    pub fn color(&self) -> String {
        format!("rgba(99, 102, 241, {})", self.opacity)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64, rng: &mut Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Positions are left as they are. Anything now outside the smaller
    /// bounds is wrapped back in by the next `step`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        for p in &mut self.particles {
            p.x = wrap(p.x + p.dx, self.width);
            p.y = wrap(p.y + p.dy, self.height);
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.fill_circle(Point::new(p.x, p.y), p.radius, &p.color());
        }
    }

    pub fn frame<S: Surface>(&mut self, surface: &mut S) {
        self.step();
        self.draw(surface);
    }
}

/// Wraps `value` into `[0, bound)`, carrying the overshoot to the far edge.
fn wrap(value: f64, bound: f64) -> f64 {
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can round up to `bound` for tiny negative inputs
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::surface::recording::{Op, RecordingSurface};

    fn in_bounds(field: &ParticleField) -> bool {
        let (w, h) = field.bounds();
        field
            .particles()
            .iter()
            .all(|p| p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h)
    }

    #[test]
    fn initial_ranges() {
        let mut rng = Rng::with_seed(11);
        let field = ParticleField::new(DEFAULT_PARTICLE_COUNT, 800.0, 600.0, &mut rng);
        assert_eq!(field.particles().len(), 100);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!((1.0..4.0).contains(&p.radius));
            assert!((-1.0..1.0).contains(&p.dx));
            assert!((-1.0..1.0).contains(&p.dy));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn one_step_on_800_by_600() {
        let mut rng = Rng::with_seed(3);
        let mut field = ParticleField::new(100, 800.0, 600.0, &mut rng);
        field.step();
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
        }
    }

    #[test]
    fn many_steps_stay_in_bounds() {
        let mut rng = Rng::with_seed(99);
        let mut field = ParticleField::new(100, 320.0, 240.0, &mut rng);
        for _ in 0..5_000 {
            field.step();
            assert!(in_bounds(&field));
        }
    }

    #[test]
    fn wraps_rather_than_bounces() {
        let mut field = ParticleField {
            particles: vec![
                Particle {
                    x: 799.5,
                    y: 0.2,
                    dx: 1.0,
                    dy: -0.5,
                    radius: 2.0,
                    opacity: 0.5,
                },
            ],
            width: 800.0,
            height: 600.0,
        };
        field.step();
        let p = field.particles()[0];
        assert!((p.x - 0.5).abs() < 1e-9);
        assert!((p.y - 599.7).abs() < 1e-9);
        assert_eq!(p.dx, 1.0);
        assert_eq!(p.dy, -0.5);
    }

    #[test]
    fn exact_bound_is_excluded() {
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(-1e-18, 800.0), 0.0);
        assert_eq!(wrap(-0.5, 800.0), 799.5);
    }

    #[test]
    fn shrink_is_corrected_on_next_step() {
        let mut rng = Rng::with_seed(5);
        let mut field = ParticleField::new(100, 1920.0, 1080.0, &mut rng);
        field.resize(400.0, 300.0);
        assert!(!in_bounds(&field));
        field.step();
        assert!(in_bounds(&field));
    }

    #[test]
    fn empty_canvas_is_a_no_op() {
        let mut rng = Rng::with_seed(1);
        let mut field = ParticleField::new(10, 0.0, 0.0, &mut rng);
        let before = field.particles().to_vec();
        field.step();
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn frame_clears_then_draws_each_particle() {
        let mut rng = Rng::with_seed(8);
        let mut field = ParticleField::new(4, 100.0, 100.0, &mut rng);
        let mut surface = RecordingSurface::default();
        field.frame(&mut surface);

        assert_eq!(surface.ops.len(), 5);
        assert_eq!(surface.ops[0], Op::Clear(100.0, 100.0));
        for (op, p) in surface.ops[1..].iter().zip(field.particles()) {
            match op {
                Op::Circle(center, radius, color) => {
                    assert_eq!(*center, Point::new(p.x, p.y));
                    assert_eq!(*radius, p.radius);
                    assert!(color.starts_with("rgba(99, 102, 241, "));
                }
                other => panic!("unexpected draw op {other:?}"),
            }
        }
    }
}
