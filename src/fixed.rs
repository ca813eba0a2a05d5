//! Fixed point geometry
//!
//! Triangle inside/outside tests run on integers so that pixels on a shared
//! edge are decided the same way by both neighbors, whatever the float
//! rounding of the vertices.

/// Sub-pixel precision, in bits
pub const FIXED_SHIFT : i64 = 8;
/// Fixed point units per pixel
pub const FIXED_BIAS  : i64 = 1 << FIXED_SHIFT;
/// Largest accepted device coordinate magnitude, in pixels
///
/// A coordinate is at most 2^48 fixed point units, a difference of two at
/// most 2^49 and a product of two differences at most 2^98, so `orient_2d`
/// cannot overflow an i128. Coordinates beyond this are clamped, which
/// moves the vertex and so distorts the shape of its triangle.
pub const MAX_COORD   : f64 = (1u64 << 40) as f64;

/// Point in fixed point device coordinates
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// Fixed point location of the center of pixel (`x`,`y`)
    pub fn pixel_center(x: i64, y: i64) -> Self {
        Self::new(x * FIXED_BIAS + FIXED_BIAS / 2, y * FIXED_BIAS + FIXED_BIAS / 2)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, o: Point) -> Point {
        Point::new(self.x - o.x, self.y - o.y)
    }
}

/// Convert a device coordinate to fixed point
///
/// Rounds towards negative infinity.
///
///     use uiraster::{as_int, FIXED_BIAS};
///
///     assert_eq!(as_int(1.0), FIXED_BIAS);
///     assert_eq!(as_int(0.5), FIXED_BIAS / 2);
///     assert_eq!(as_int(-0.001), -1);
///
pub fn as_int(v: f32) -> i64 {
    (f64::from(v).clamp(-MAX_COORD, MAX_COORD) * FIXED_BIAS as f64).floor() as i64
}

/// Convert a device position to fixed point
pub fn as_point(x: f32, y: f32) -> Point {
    Point::new(as_int(x), as_int(y))
}

/// Twice the signed area of the triangle (`a`,`b`,`c`)
///
/// Positive when `c` lies to the left of `a`→`b` in a y-up frame, negative
/// when to the right and zero when the three points are collinear.
///
///     use uiraster::{orient_2d, Point};
///
///     let a = Point::new(0, 0);
///     let b = Point::new(10, 0);
///     assert!(orient_2d(a, b, Point::new(0, 10)) > 0);
///     assert!(orient_2d(a, b, Point::new(0, -10)) < 0);
///     assert_eq!(orient_2d(a, b, Point::new(20, 0)), 0);
///
pub fn orient_2d(a: Point, b: Point, c: Point) -> i128 {
    let d = |p: i64, q: i64| i128::from(p - q);
    (d(b.x, a.x) * d(c.y, a.y)) - (d(b.y, a.y) * d(c.x, a.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_coordinates_are_clamped() {
        let m = (MAX_COORD as i64) * FIXED_BIAS;
        assert_eq!(as_int(1.0e13), m);
        assert_eq!(as_int(-1.0e13), -m);
        assert_eq!(as_int(4.0e6), 4_000_000 * FIXED_BIAS);
        assert_eq!(as_int(f32::NAN), 0);
    }
    #[test]
    fn extreme_orientation_does_not_overflow() {
        let m = as_int(1.0e13);
        let a = Point::new(-m, -m);
        let b = Point::new(m, -m);
        let c = Point::new(-m, m);
        let area = orient_2d(a, b, c);
        assert_eq!(area, i128::from(2 * m) * i128::from(2 * m));
        assert_eq!(orient_2d(a, c, b), -area);
    }
    #[test]
    fn pixel_centers() {
        assert_eq!(Point::pixel_center(0, 0), Point::new(128, 128));
        assert_eq!(Point::pixel_center(3, -1), Point::new(3 * 256 + 128, -128));
        assert_eq!(as_point(3.5, 0.5), Point::pixel_center(3, 0));
    }
}
