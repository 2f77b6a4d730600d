//! Cell-local drawing primitives.
//!
//! Shapes are described in the coordinate space of a single grid cell.
//! [`Graphics`] applies the active [`Transform`] and forwards the resulting
//! polygons and circles to a [`Renderer`].

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Placement and rotation of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x: f32,
    y: f32,
    size: f32,
    rotation: u8,
}

impl Transform {
    /// `rotation` is a quarter-turn count; only its value modulo 4 matters.
    pub const fn new(x: f32, y: f32, size: f32, rotation: u8) -> Self {
        Self {
            x,
            y,
            size,
            rotation: rotation % 4,
        }
    }

    /// Transform without offset or rotation.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 0)
    }

    /// Map a local point to global coordinates.
    ///
    /// `w` and `h` are the extent of the primitive anchored at `(x, y)`, so
    /// that rotated circles keep their top-left anchor semantics.
    pub fn transform_point(&self, x: f32, y: f32, w: f32, h: f32) -> Point {
        let right = self.x + self.size;
        let bottom = self.y + self.size;
        match self.rotation {
            1 => Point::new(right - y - h, self.y + x),
            2 => Point::new(right - x - w, bottom - y - h),
            3 => Point::new(self.x + y, bottom - x - w),
            _ => Point::new(self.x + x, self.y + y),
        }
    }
}

/// Backend receiving transformed primitives.
pub trait Renderer {
    /// Fill the whole canvas. Called at most once, before any shape.
    fn set_background(&mut self, color: &str);

    /// Start a group of primitives filled with `color`.
    fn begin_shape(&mut self, color: &str);

    fn end_shape(&mut self);

    /// Closed polygon in global coordinates.
    fn add_polygon(&mut self, points: &[Point]);

    /// Circle whose bounding box has its top-left corner at `point`.
    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: Option<bool>);
}

/// Drawing context used by the shape catalog.
pub struct Graphics<'r, R: Renderer> {
    renderer: &'r mut R,
    transform: Transform,
}

impl<'r, R: Renderer> Graphics<'r, R> {
    pub fn new(renderer: &'r mut R) -> Self {
        Self {
            renderer,
            transform: Transform::identity(),
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut *self.renderer
    }

    /// Add a polygon; `invert` reverses the winding.
    pub fn add_polygon(&mut self, points: &[Point], invert: bool) {
        let transform = self.transform;
        let map = |p: &Point| transform.transform_point(p.x, p.y, 0.0, 0.0);
        let transformed: Vec<Point> = if invert {
            points.iter().rev().map(map).collect()
        } else {
            points.iter().map(map).collect()
        };
        self.renderer.add_polygon(&transformed);
    }

    /// Add a circle with top-left corner `(x, y)` and diameter `size`.
    pub fn add_circle(&mut self, x: f32, y: f32, size: f32, invert: bool) {
        let point = self.transform.transform_point(x, y, size, size);
        self.renderer.add_circle(point, size, Some(invert));
    }

    pub fn add_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, invert: bool) {
        self.add_polygon(
            &[
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
            ],
            invert,
        );
    }

    /// Right triangle inside the rectangle, with the corner at index
    /// `floor(r) % 4` removed (0 = top right, clockwise).
    pub fn add_triangle(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32, invert: bool) {
        let mut points = vec![
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
            Point::new(x, y),
        ];
        points.remove(r.floor() as usize % 4);
        self.add_polygon(&points, invert);
    }

    pub fn add_rhombus(&mut self, x: f32, y: f32, w: f32, h: f32, invert: bool) {
        self.add_polygon(
            &[
                Point::new(x + w / 2.0, y),
                Point::new(x + w, y + h / 2.0),
                Point::new(x + w / 2.0, y + h),
                Point::new(x, y + h / 2.0),
            ],
            invert,
        );
    }
}
