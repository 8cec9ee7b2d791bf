//! Drifting wireframe icosahedra for the wide-viewport background.
//!
//! Shapes live in a small world space (x and y in `[-5, 5]`) viewed by a
//! perspective camera at `z = 5`, and are projected onto the 2D canvas.

use fastrand::Rng;

use super::surface::{Point, Segment, Surface};
use super::theme::Theme;

pub const DEFAULT_SHAPE_COUNT: usize = 5;
const SPIN_PER_FRAME: f64 = 0.005;
const RISE_PER_FRAME: f64 = 0.005;
const CEILING: f64 = 5.0;
const FLOOR: f64 = -5.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }

    fn distance_sq(self, o: Self) -> f64 {
        let (dx, dy, dz) = (self.x - o.x, self.y - o.y, self.z - o.z);
        dx * dx + dy * dy + dz * dz
    }

    fn length(self) -> f64 {
        self.distance_sq(Self::default()).sqrt()
    }

    /// Euler XYZ order with no Z component: Y is applied first, then X.
    fn rotate(self, rx: f64, ry: f64) -> Self {
        let (sy, cy) = ry.sin_cos();
        let x1 = self.x * cy + self.z * sy;
        let z1 = -self.x * sy + self.z * cy;
        let (sx, cx) = rx.sin_cos();
        Self::new(x1, self.y * cx - z1 * sx, self.y * sx + z1 * cx)
    }
}

/// Unit-radius icosahedron.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    edges: Vec<(usize, usize)>,
}

impl Mesh {
    pub fn icosahedron() -> Self {
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        let raw = [
            Vec3::new(-1.0, phi, 0.0),
            Vec3::new(1.0, phi, 0.0),
            Vec3::new(-1.0, -phi, 0.0),
            Vec3::new(1.0, -phi, 0.0),
            Vec3::new(0.0, -1.0, phi),
            Vec3::new(0.0, 1.0, phi),
            Vec3::new(0.0, -1.0, -phi),
            Vec3::new(0.0, 1.0, -phi),
            Vec3::new(phi, 0.0, -1.0),
            Vec3::new(phi, 0.0, 1.0),
            Vec3::new(-phi, 0.0, -1.0),
            Vec3::new(-phi, 0.0, 1.0),
        ];
        // neighbouring vertices of this construction are exactly 2 apart
        let mut edges = Vec::with_capacity(30);
        for i in 0..raw.len() {
            for j in i + 1..raw.len() {
                if (raw[i].distance_sq(raw[j]) - 4.0).abs() < 1e-9 {
                    edges.push((i, j));
                }
            }
        }
        let vertices = raw.iter().map(|v| v.scale(1.0 / v.length())).collect();
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub position: Vec3,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub scale: f64,
}

impl Shape {
    fn random(rng: &mut Rng) -> Self {
        Self {
            position: Vec3::new(
                (rng.f64() - 0.5) * 10.0,
                (rng.f64() - 0.5) * 10.0,
                (rng.f64() - 0.5) * 5.0,
            ),
            rotation_x: rng.f64() * std::f64::consts::PI,
            rotation_y: rng.f64() * std::f64::consts::PI,
            scale: rng.f64() * 0.5 + 0.5,
        }
    }

    fn step(&mut self) {
        self.rotation_x += SPIN_PER_FRAME;
        self.rotation_y += SPIN_PER_FRAME;
        self.position.y += RISE_PER_FRAME;
        if self.position.y > CEILING {
            self.position.y = FLOOR;
        }
    }

    fn world(&self, v: Vec3) -> Vec3 {
        v.scale(self.scale)
            .rotate(self.rotation_x, self.rotation_y)
            .add(self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub z: f64,
    pub fov_degrees: f64,
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            z: 5.0,
            fov_degrees: 75.0,
            near: 0.1,
        }
    }
}

impl Camera {
    /// Screen position of `p`, or `None` when it sits behind the near plane.
    pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Point> {
        let depth = self.z - p.z;
        if depth <= self.near || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let focal = 1.0 / (self.fov_degrees.to_radians() / 2.0).tan();
        let ndc_x = focal / (width / height) * p.x / depth;
        let ndc_y = focal * p.y / depth;
        Some(Point::new(
            (ndc_x + 1.0) * 0.5 * width,
            (1.0 - ndc_y) * 0.5 * height,
        ))
    }
}

pub fn stroke_color(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "rgba(99, 102, 241, 0.8)",
        Theme::Light => "rgba(59, 130, 246, 0.8)",
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    mesh: Mesh,
    shapes: Vec<Shape>,
    camera: Camera,
    width: f64,
    height: f64,
}

impl Scene {
    pub fn new(count: usize, width: f64, height: f64, rng: &mut Rng) -> Self {
        Self {
            mesh: Mesh::icosahedron(),
            shapes: (0..count).map(|_| Shape::random(rng)).collect(),
            camera: Camera::default(),
            width,
            height,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        self.shapes.iter_mut().for_each(Shape::step);
    }

    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.shapes.len() * self.mesh.edges.len());
        for shape in &self.shapes {
            let projected: Vec<Option<Point>> = self
                .mesh
                .vertices
                .iter()
                .map(|v| {
                    self.camera
                        .project(shape.world(*v), self.width, self.height)
                })
                .collect();
            for &(a, b) in &self.mesh.edges {
                if let (Some(pa), Some(pb)) = (projected[a], projected[b]) {
                    out.push((pa, pb));
                }
            }
        }
        out
    }

    pub fn frame<S: Surface>(&mut self, surface: &mut S, theme: Theme) {
        self.step();
        surface.clear(self.width, self.height);
        surface.stroke_segments(&self.segments(), stroke_color(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::surface::recording::{Op, RecordingSurface};

    #[test]
    fn icosahedron_topology() {
        let mesh = Mesh::icosahedron();
        assert_eq!(mesh.vertices().len(), 12);
        assert_eq!(mesh.edges().len(), 30);
        for v in mesh.vertices() {
            assert!((v.length() - 1.0).abs() < 1e-9);
        }
        for i in 0..12 {
            let degree = mesh
                .edges()
                .iter()
                .filter(|(a, b)| *a == i || *b == i)
                .count();
            assert_eq!(degree, 5);
        }
    }

    #[test]
    fn axis_projects_to_centre() {
        let camera = Camera::default();
        let p = camera.project(Vec3::new(0.0, 0.0, 0.0), 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn up_is_up_on_screen() {
        let camera = Camera::default();
        let p = camera.project(Vec3::new(1.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(p.x > 400.0);
        assert!(p.y < 300.0);
    }

    #[test]
    fn behind_camera_is_culled() {
        let camera = Camera::default();
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0), 800.0, 600.0).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, 9.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(0.3, -0.7, 0.2);
        let r = v.rotate(1.1, -0.4);
        assert!((v.length() - r.length()).abs() < 1e-12);
    }

    #[test]
    fn shapes_rise_and_wrap() {
        let mut rng = Rng::with_seed(21);
        let mut scene = Scene::new(DEFAULT_SHAPE_COUNT, 1280.0, 720.0, &mut rng);
        assert_eq!(scene.shapes().len(), 5);
        for s in scene.shapes() {
            assert!((-5.0..5.0).contains(&s.position.y));
            assert!((-2.5..2.5).contains(&s.position.z));
            assert!((0.5..1.0).contains(&s.scale));
        }
        for _ in 0..4_000 {
            scene.step();
            for s in scene.shapes() {
                assert!(s.position.y >= FLOOR && s.position.y <= CEILING);
            }
        }
    }

    #[test]
    fn frame_strokes_every_edge_with_theme_colour() {
        let mut rng = Rng::with_seed(4);
        let mut scene = Scene::new(5, 1280.0, 720.0, &mut rng);
        let mut surface = RecordingSurface::default();
        scene.frame(&mut surface, Theme::Light);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(1280.0, 720.0),
                Op::Segments(150, "rgba(59, 130, 246, 0.8)".to_string()),
            ]
        );
    }
}
