//! Axis-aligned bounding-box collision
//!
//! One predicate serves both player-vs-obstacle hits and player-vs-field
//! touches; only the operand shapes differ.

use glam::Vec2;

/// An axis-aligned rectangle given by its top-left corner and extent
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Rect from a top-left position vector and extent
    pub fn from_pos(pos: Vec2, w: f32, h: f32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }
}

/// True iff the two rects overlap on both axes.
///
/// Strict inequalities: rects that merely share an edge do NOT collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        let b = Rect::new(15.0, 15.0, 30.0, 30.0);
        assert!(rects_overlap(&a, &b));
    }

    #[test]
    fn test_overlap_disjoint() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        let b = Rect::new(100.0, 0.0, 30.0, 30.0);
        assert!(!rects_overlap(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        // Shares the x=30 edge exactly
        let b = Rect::new(30.0, 0.0, 30.0, 30.0);
        assert!(!rects_overlap(&a, &b));
        // Shares the y=30 edge exactly
        let c = Rect::new(0.0, 30.0, 30.0, 30.0);
        assert!(!rects_overlap(&a, &c));
    }

    #[test]
    fn test_one_pixel_overlap_collides() {
        let a = Rect::new(0.0, 0.0, 30.0, 30.0);
        let b = Rect::new(29.0, 29.0, 30.0, 30.0);
        assert!(rects_overlap(&a, &b));
    }

    #[test]
    fn test_containment_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 20.0, 10.0);
        assert!(rects_overlap(&outer, &inner));
        assert!(rects_overlap(&inner, &outer));
    }

    #[test]
    fn test_mixed_shapes() {
        // Square obstacle vs the flat 20x10 field shape
        let square = Rect::new(10.0, 10.0, 30.0, 30.0);
        let flat = Rect::new(25.0, 35.0, 20.0, 10.0);
        assert!(rects_overlap(&square, &flat));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        #[test]
        fn prop_self_overlap(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(rects_overlap(&r, &r));
        }
    }
}
