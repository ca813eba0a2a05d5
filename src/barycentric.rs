//! Barycentric interpolation of vertex attributes
//!
//! Weights are linear in screen space, so a triangle is set up once with the
//! weights at a reference pixel center and their change per pixel step in x
//! and y. The rasterizer then walks the planes with additions only.

use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;

/// Weights of the three triangle vertices
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Barycentric {
    pub w0: f32,
    pub w1: f32,
    pub w2: f32,
}

impl Barycentric {
    pub fn new(w0: f32, w1: f32, w2: f32) -> Self {
        Self { w0, w1, w2 }
    }
    /// Weighted sum of three scalar attributes
    pub fn mix(&self, a0: f32, a1: f32, a2: f32) -> f32 {
        self.w0 * a0 + self.w1 * a1 + self.w2 * a2
    }
}

impl Mul<Barycentric> for f32 {
    type Output = Barycentric;
    fn mul(self, b: Barycentric) -> Barycentric {
        Barycentric::new(self * b.w0, self * b.w1, self * b.w2)
    }
}
impl Add for Barycentric {
    type Output = Barycentric;
    fn add(self, b: Barycentric) -> Barycentric {
        Barycentric::new(self.w0 + b.w0, self.w1 + b.w1, self.w2 + b.w2)
    }
}
impl AddAssign for Barycentric {
    fn add_assign(&mut self, b: Barycentric) {
        self.w0 += b.w0;
        self.w1 += b.w1;
        self.w2 += b.w2;
    }
}

/// Floating point edge function, twice the signed area of (`a`,`b`,`p`)
pub fn edge_function(a: (f32, f32), b: (f32, f32), p: (f32, f32)) -> f32 {
    ((b.0 - a.0) * (p.1 - a.1)) - ((b.1 - a.1) * (p.0 - a.0))
}

/// Interpolation planes of a triangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Planes {
    /// Weights at the reference point
    pub origin: Barycentric,
    /// Change of the weights for one pixel step in x
    pub dx: Barycentric,
    /// Change of the weights for one pixel step in y
    pub dy: Barycentric,
}

impl Planes {
    /// Set up the planes of triangle (`p0`,`p1`,`p2`) around `origin`
    ///
    /// Returns None for a zero area triangle.
    ///
    ///     use uiraster::Planes;
    ///
    ///     let p = Planes::new((0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)).unwrap();
    ///     assert_eq!(p.origin.mix(0.0, 4.0, 0.0), 1.0);
    ///     assert_eq!(p.dx.mix(0.0, 4.0, 0.0), 1.0);
    ///     assert_eq!(p.dy.mix(0.0, 4.0, 0.0), 0.0);
    ///
    ///     assert!(Planes::new((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)).is_none());
    ///
    pub fn new(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), origin: (f32, f32)) -> Option<Self> {
        let area = edge_function(p0, p1, p2);
        if area == 0.0 {
            return None;
        }
        let inv_area = 1.0 / area;
        let origin = inv_area * Barycentric::new(edge_function(p1, p2, origin),
                                                 edge_function(p2, p0, origin),
                                                 edge_function(p0, p1, origin));
        // Derivatives of the edge functions
        let dx = inv_area * Barycentric::new(p1.1 - p2.1, p2.1 - p0.1, p0.1 - p1.1);
        let dy = inv_area * Barycentric::new(p2.0 - p1.0, p0.0 - p2.0, p1.0 - p0.0);
        Some(Self { origin, dx, dy })
    }
    /// Weights at `steps_x`, `steps_y` pixels away from the reference point
    pub fn at(&self, steps_x: f32, steps_y: f32) -> Barycentric {
        self.origin + steps_x * self.dx + steps_y * self.dy
    }
}
