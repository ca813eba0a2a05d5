//! Clipping Region

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle<T: std::cmp::PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}

impl Rectangle<f32> {
    /// Clip rectangle as emitted by the UI library, [min x, min y, max x, max y]
    ///
    /// Not sorted, an inverted rectangle clips everything.
    pub fn from_array(r: [f32; 4]) -> Self {
        Self { x1: r[0], y1: r[1], x2: r[2], y2: r[3] }
    }
    /// Move by (-`x`,-`y`)
    pub fn translate(&self, x: f32, y: f32) -> Self {
        Self { x1: self.x1 - x, y1: self.y1 - y, x2: self.x2 - x, y2: self.y2 - y }
    }
    /// Multiply by a per-axis scale
    pub fn scale(&self, sx: f32, sy: f32) -> Self {
        Self { x1: self.x1 * sx, y1: self.y1 * sy, x2: self.x2 * sx, y2: self.y2 * sy }
    }
}

/// Half-open integer pixel box, [x1,x2) x [y1,y2)
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct PixelBox {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl PixelBox {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }
    /// All pixels of a `width` x `height` target
    pub fn target(width: usize, height: usize) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }
    /// Pixels whose centers lie in the device space rectangle `r`
    ///
    /// A center on the minimum edge is inside, one on the maximum edge
    /// is not.
    ///
    ///     use uiraster::{PixelBox, Rectangle};
    ///
    ///     let b = PixelBox::from_centers(&Rectangle::from_array([0.0, 0.5, 10.0, 3.7]));
    ///     assert_eq!(b, PixelBox::new(0, 0, 10, 4));
    ///
    pub fn from_centers(r: &Rectangle<f32>) -> Self {
        let lo = |v: f32| (f64::from(v) - 0.5).ceil() as i64;
        Self::new(lo(r.x1), lo(r.y1), lo(r.x2), lo(r.y2))
    }
    /// Pixels whose centers lie in (min, max] along both axes
    ///
    /// This is the set of pixels the triangle rasterizer fills for a
    /// rectangle split along its diagonal.
    pub fn from_span(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        let lo = |v: f32| (f64::from(v) + 0.5).floor() as i64;
        Self::new(lo(min_x), lo(min_y), lo(max_x), lo(max_y))
    }
    /// Overlap of two boxes, possibly empty
    pub fn intersect(&self, o: &PixelBox) -> Self {
        Self::new(self.x1.max(o.x1), self.y1.max(o.y1),
                  self.x2.min(o.x2), self.y2.min(o.y2))
    }
    /// True if no pixel is inside
    pub fn is_empty(&self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }
    /// Number of pixels across
    pub fn width(&self) -> usize {
        (self.x2 - self.x1).max(0) as usize
    }
    /// Number of pixels down
    pub fn height(&self) -> usize {
        (self.y2 - self.y1).max(0) as usize
    }
    /// True if pixel (`x`,`y`) is inside
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
}
