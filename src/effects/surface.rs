#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub type Segment = (Point, Point);

/// Drawing target for the canvas effects.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
    fn stroke_segments(&mut self, segments: &[Segment], color: &str);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(f64, f64),
        Circle(Point, f64, String),
        Segments(usize, String),
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Op::Clear(width, height));
        }

        fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
            self.ops.push(Op::Circle(center, radius, color.to_string()));
        }

        fn stroke_segments(&mut self, segments: &[Segment], color: &str) {
            self.ops.push(Op::Segments(segments.len(), color.to_string()));
        }
    }
}
