//! Axis-aligned bounding boxes for batch extent tracking

use cgmath::{Matrix4, Vector3};

/// Axis-aligned box spanning `min` through `max`
///
/// The empty box keeps `min` above `max` so that unions start from the
/// first included point instead of the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Smallest corner on every axis
    pub min: Vector3<f32>,
    /// Largest corner on every axis
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a box from explicit corners
    pub const fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// The box containing nothing
    pub const fn empty() -> Self {
        Self {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Whether the box contains no points
    pub const fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to contain the given point
    pub fn include(&mut self, point: Vector3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// The smallest box containing both operands
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let mut merged = *self;
        merged.include(other.min);
        merged.include(other.max);
        merged
    }

    /// The box containing every corner of this box under the given transform
    ///
    /// Transforming all eight corners keeps the result conservative for
    /// rotated boxes rather than rotating just the two extreme corners.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4<f32>) -> Self {
        if self.is_empty() {
            return Self::empty();
        }

        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut result = Self::empty();
        for corner in corners {
            let moved = matrix * corner.extend(1.0);
            result.include(moved.truncate());
        }
        result
    }

    /// Centre point of the box
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Side lengths of the box
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
