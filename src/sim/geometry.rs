//! Circle geometry shared by the avatar and roaming entities

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A moving circle in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center position
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// True iff the centers are closer than the sum of radii
///
/// Touching circles (distance == r1 + r2) do not overlap.
#[inline]
pub fn overlaps(a: &Circle, b: &Circle) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn circle(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(Vec2::new(x, y), Vec2::ZERO, r)
    }

    #[test]
    fn test_overlap_and_touching() {
        assert!(overlaps(&circle(0.0, 0.0, 10.0), &circle(15.0, 0.0, 10.0)));
        // Exactly touching is not an overlap
        assert!(!overlaps(&circle(0.0, 0.0, 10.0), &circle(20.0, 0.0, 10.0)));
        assert!(!overlaps(&circle(0.0, 0.0, 3.0), &circle(30.0, 40.0, 3.0)));
    }

    #[test]
    fn test_concentric_overlap() {
        assert!(overlaps(&circle(7.0, 7.0, 1.0), &circle(7.0, 7.0, 50.0)));
    }

    #[test]
    fn test_advance() {
        let mut c = Circle::new(Vec2::new(1.0, 2.0), Vec2::new(0.5, -1.0), 4.0);
        c.advance();
        assert_eq!(c.pos, Vec2::new(1.5, 1.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, ar in 0.1f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, br in 0.1f32..100.0,
        ) {
            let a = circle(ax, ay, ar);
            let b = circle(bx, by, br);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }
    }
}
