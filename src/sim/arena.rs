//! Rectangular arena bounds and wall reflection
//!
//! The arena spans `[0, width) x [0, height)` with a border inset on every
//! side. A circle is contained when `border <= center - radius` and
//! `center + radius <= extent - border` on both axes.

use serde::{Deserialize, Serialize};

use super::geometry::Circle;
use crate::config::ConfigError;

/// Arena axis, used to share the boundary policy between both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::X, Axis::Y];

    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }
}

/// Fixed play area for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Inset of the border from every edge
    pub border: f32,
}

impl Arena {
    /// Build an arena, rejecting extents that leave no room inside the border
    pub fn new(width: f32, height: f32, border: f32) -> Result<Self, ConfigError> {
        if !(border.is_finite() && border >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "border_inset",
                value: border,
            });
        }
        let min = border * 2.0;
        if !(width.is_finite() && height.is_finite()) || width <= min || height <= min {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                border,
            });
        }
        Ok(Self {
            width,
            height,
            border,
        })
    }

    /// Full extent along an axis
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Inner extent between the two borders along an axis
    #[inline]
    pub fn inner_extent(&self, axis: Axis) -> f32 {
        self.extent(axis) - self.border * 2.0
    }

    /// Lowest and highest allowed center for a circle of `radius`
    #[inline]
    fn center_limits(&self, axis: Axis, radius: f32) -> (f32, f32) {
        (
            self.border + radius,
            self.extent(axis) - self.border - radius,
        )
    }

    /// Whether the circle sits fully inside the border
    pub fn contains(&self, circle: &Circle) -> bool {
        Axis::BOTH.iter().all(|&axis| {
            let (lo, hi) = self.center_limits(axis, circle.radius);
            let c = circle.pos[axis.index()];
            c >= lo && c <= hi
        })
    }

    /// Reflect a circle off the walls on one axis
    ///
    /// A crossing edge clamps the center back inside and negates that
    /// axis's velocity. Returns true if a wall was hit. Calling it again on
    /// a contained circle changes nothing.
    ///
    /// A circle wider than the inner extent cannot bounce: it is centered
    /// on that axis and its velocity there is zeroed.
    pub fn reflect_axis(&self, circle: &mut Circle, axis: Axis) -> bool {
        let i = axis.index();
        let (lo, hi) = self.center_limits(axis, circle.radius);
        if lo > hi {
            let mid = self.extent(axis) / 2.0;
            let moved = circle.pos[i] != mid || circle.vel[i] != 0.0;
            circle.pos[i] = mid;
            circle.vel[i] = 0.0;
            return moved;
        }
        let mut hit = false;
        if circle.pos[i] < lo {
            circle.pos[i] = lo;
            circle.vel[i] = -circle.vel[i];
            hit = true;
        }
        if circle.pos[i] > hi {
            circle.pos[i] = hi;
            circle.vel[i] = -circle.vel[i];
            hit = true;
        }
        hit
    }

    /// Reflect a circle off the walls on both axes
    pub fn reflect(&self, circle: &mut Circle) -> bool {
        let hit_x = self.reflect_axis(circle, Axis::X);
        let hit_y = self.reflect_axis(circle, Axis::Y);
        hit_x || hit_y
    }

    /// Pull a circle inside the border without touching its velocity
    ///
    /// A circle wider than the inner extent is centered on that axis.
    pub fn clamp(&self, circle: &mut Circle) {
        for axis in Axis::BOTH {
            let i = axis.index();
            let (lo, hi) = self.center_limits(axis, circle.radius);
            if lo > hi {
                circle.pos[i] = self.extent(axis) / 2.0;
            } else if circle.pos[i] < lo {
                circle.pos[i] = lo;
            } else if circle.pos[i] > hi {
                circle.pos[i] = hi;
            }
        }
    }
}
