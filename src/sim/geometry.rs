//! Geometry primitives for the swept collision search
//!
//! Axis-aligned boxes, infinite lines ("planes" in 2D) and parametrized rays,
//! plus the fixed reflection transforms used when the puck bounces.
//!
//! All values are immutable: operations such as [`Box2::inflate`] return a new
//! box rather than mutating the original.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Unit vectors along the coordinate axes
pub mod unit {
    use glam::Vec2;

    pub const I: Vec2 = Vec2::new(1.0, 0.0);
    pub const J: Vec2 = Vec2::new(0.0, 1.0);
}

/// Fixed 90°-multiple transforms
pub mod transform {
    use glam::{Mat2, Vec2};

    /// Negates the x component
    pub const FLIP_X: Mat2 = Mat2::from_cols(Vec2::new(-1.0, 0.0), Vec2::new(0.0, 1.0));
    /// Negates the y component
    pub const FLIP_Y: Mat2 = Mat2::from_cols(Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0));

    /// Counter-clockwise rotation by `theta` radians
    #[inline]
    pub fn rot(theta: f32) -> Mat2 {
        Mat2::from_angle(theta)
    }
}

/// Reflect velocity off a surface with the given unit normal
///
/// v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Axis-aligned bounding box
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box2 {
    min: Vec2,
    max: Vec2,
}

impl Box2 {
    /// Build a box from its corners
    ///
    /// # Panics
    /// Panics if `min` exceeds `max` on either axis.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        assert!(min.cmple(max).all(), "invalid box: min {min} > max {max}");
        Self { min, max }
    }

    /// Build a box from its corners, or `None` if they are inverted
    pub fn try_new(min: Vec2, max: Vec2) -> Option<Self> {
        min.cmple(max).all().then_some(Self { min, max })
    }

    /// Build a box from its minimum corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min, min + size)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn centre(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive containment test (points on the boundary are contained)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Strict containment test (points on the boundary are not contained)
    #[inline]
    pub fn contains_strictly(&self, point: Vec2) -> bool {
        point.cmpgt(self.min).all() && point.cmplt(self.max).all()
    }

    /// Whether `other` lies entirely within this box
    pub fn contains_box(&self, other: &Box2) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Whether the two boxes overlap (inclusive on faces)
    pub fn intersects(&self, other: &Box2) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }

    /// Symmetric Minkowski expansion by `amount` (negative shrinks)
    ///
    /// # Panics
    /// Panics if shrinking would invert the box.
    pub fn inflate(&self, amount: f32) -> Box2 {
        let delta = Vec2::splat(amount);
        Box2::new(self.min - delta, self.max + delta)
    }

    /// Translated copy of this box
    pub fn translated(&self, offset: Vec2) -> Box2 {
        Box2 {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Copy of this box with its vertical extent replaced, x extent unchanged
    pub fn with_y_extent(&self, min_y: f32, height: f32) -> Box2 {
        Box2::new(
            Vec2::new(self.min.x, min_y),
            Vec2::new(self.max.x, min_y + height),
        )
    }
}

/// An infinite line in 2D, stored in Hessian normal form: `normal·p + offset = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec2,
    pub offset: f32,
}

impl Plane {
    /// The line passing through `p0` and `p1`
    ///
    /// The normal is the unit perpendicular of `p1 - p0`.
    pub fn through(p0: Vec2, p1: Vec2) -> Self {
        let normal = (p1 - p0).perp().normalize();
        Self {
            normal,
            offset: -normal.dot(p0),
        }
    }

    /// Signed distance from the plane to `point`
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        self.normal.dot(point) + self.offset
    }
}

/// A ray `origin + t * direction`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametrizedLine {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl ParametrizedLine {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Parameter `t` at which the line meets `plane`, in units of `direction`
    ///
    /// With a unit direction this is the signed distance along the line.
    /// Returns `NaN` when the line is parallel to the plane.
    pub fn intersection_parameter(&self, plane: &Plane) -> f32 {
        let denominator = plane.normal.dot(self.direction);
        if denominator == 0.0 {
            return f32::NAN;
        }
        -plane.signed_distance(self.origin) / denominator
    }

    /// Point on the line at parameter `t`
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }

    /// Point where the line meets `plane` (components are `NaN` if parallel)
    pub fn intersection_point(&self, plane: &Plane) -> Vec2 {
        self.point_at(self.intersection_parameter(plane))
    }
}
