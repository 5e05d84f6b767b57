/// Axis-aligned bounding box in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Overlap test with `padding` pixels shaved off the far edges of both boxes,
/// so near-misses at sprite corners don't count.
///
/// Symmetric in its two arguments.
#[inline]
pub fn collides(a: &Rect, b: &Rect, padding: f32) -> bool {
    a.x < b.x + b.w - padding
        && a.x + a.w - padding > b.x
        && a.y < b.y + b.h - padding
        && a.y + a.h - padding > b.y
}
