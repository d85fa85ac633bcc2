//! Axis-aligned collision for the car game
//!
//! Car sprites have rounded corners and protruding wheels, so every box is
//! shrunk by `COLLISION_INSET` on each side before testing. Cars that merely
//! touch visually do not crash.

use glam::Vec2;

use crate::consts::COLLISION_INSET;

/// Axis-aligned bounding box, `pos` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Shrink by `margin` on all four sides
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    /// Strict overlap on both axes (shared edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// Whether two car boxes collide after both are inset by `COLLISION_INSET`
#[inline]
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.inset(COLLISION_INSET).overlaps(&b.inset(COLLISION_INSET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_cars_collide() {
        let player = Aabb::new(178.0, 490.0, 44.0, 80.0);
        let obstacle = Aabb::new(178.0, 450.0, 44.0, 80.0);
        assert!(intersects(&player, &obstacle));
        assert!(intersects(&obstacle, &player));
    }

    #[test]
    fn test_touching_boxes_do_not_collide() {
        // Raw boxes share the edge x = 222
        let player = Aabb::new(178.0, 490.0, 44.0, 80.0);
        let obstacle = Aabb::new(222.0, 490.0, 44.0, 80.0);
        assert!(!intersects(&player, &obstacle));
    }

    #[test]
    fn test_near_miss_inside_inset_band() {
        // Raw boxes overlap by 15 horizontally, inset boxes are 1 apart
        let player = Aabb::new(100.0, 100.0, 44.0, 80.0);
        let obstacle = Aabb::new(129.0, 100.0, 44.0, 80.0);
        assert!(player.overlaps(&obstacle));
        assert!(!intersects(&player, &obstacle));

        // One unit closer and the inset boxes overlap
        let obstacle = Aabb::new(127.0, 100.0, 44.0, 80.0);
        assert!(intersects(&player, &obstacle));
    }

    #[test]
    fn test_vertical_threshold() {
        // Inset player spans y in (498, 562); inset obstacle bottom is y + 72
        let player = Aabb::new(178.0, 490.0, 44.0, 80.0);
        assert!(!intersects(&player, &Aabb::new(178.0, 426.0, 44.0, 80.0)));
        assert!(intersects(&player, &Aabb::new(178.0, 427.0, 44.0, 80.0)));
    }

    #[test]
    fn test_inset_shrinks_both_axes() {
        let b = Aabb::new(10.0, 20.0, 44.0, 80.0).inset(8.0);
        assert_eq!(b.min(), Vec2::new(18.0, 28.0));
        assert_eq!(b.max(), Vec2::new(46.0, 92.0));
    }

    proptest! {
        #[test]
        fn prop_intersects_matches_inset_overlap(
            ax in -200i32..600, ay in -200i32..800,
            bx in -200i32..600, by in -200i32..800,
        ) {
            let a = Aabb::new(ax as f32, ay as f32, 44.0, 80.0);
            let b = Aabb::new(bx as f32, by as f32, 44.0, 80.0);

            // Same-sized boxes: inset by 8 each means centres must be closer
            // than (44 - 16) horizontally and (80 - 16) vertically
            let dx = (ax - bx).abs();
            let dy = (ay - by).abs();
            let expected = dx < 28 && dy < 64;
            prop_assert_eq!(intersects(&a, &b), expected);
            prop_assert_eq!(intersects(&a, &b), intersects(&b, &a));
        }
    }
}
