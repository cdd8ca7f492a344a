//! Integer axis-aligned rectangle.
//!
//! [`Rect`] is the shared geometry type for obstacle tiles, stars and actor
//! bodies. Coordinates are whole pixels in the low-resolution render target,
//! with `y` growing downwards.

/// Axis-aligned rectangle in render-target pixels.
///
/// `x`/`y` are the top-left corner. Width and height are expected to be
/// positive; a rectangle with a zero extent never intersects anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Move so the right edge sits at `right`, keeping the width.
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    /// Move so the left edge sits at `left`, keeping the width.
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Move so the bottom edge sits at `bottom`, keeping the height.
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Move so the top edge sits at `top`, keeping the height.
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Copy of this rectangle shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Strict AABB overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if this rectangle overlaps any rectangle in `others`.
    pub fn intersects_any<'a>(&self, others: impl IntoIterator<Item = &'a Rect>) -> bool {
        others.into_iter().any(|other| self.intersects(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center_y(), 40);
    }

    #[test]
    fn test_set_edges_keep_size() {
        let mut r = Rect::new(0, 0, 10, 8);
        r.set_right(50);
        assert_eq!(r, Rect::new(40, 0, 10, 8));
        r.set_bottom(20);
        assert_eq!(r, Rect::new(40, 12, 10, 8));
        r.set_left(5);
        r.set_top(6);
        assert_eq!(r, Rect::new(5, 6, 10, 8));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        let c = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_overlap_intersects_both_ways() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_zero_size_never_intersects() {
        let a = Rect::new(0, 0, 0, 10);
        let b = Rect::new(-5, -5, 20, 20);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_any() {
        let r = Rect::new(0, 5, 4, 4);
        let others = [Rect::new(100, 0, 4, 4), Rect::new(2, 8, 4, 4)];
        assert!(r.intersects_any(&others));
        assert!(!r.intersects_any(&others[..1]));
    }
}
