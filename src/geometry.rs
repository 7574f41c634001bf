//! Cylindrical-shell geometry of a single barrier.

use crate::errors::{GenRepoError, GenRepoResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Position of a barrier's centroid, in repository coordinates (m).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The cylindrical shell occupied by a barrier.
///
/// Invariant: `outer_radius >= inner_radius >= 0` and `length >= 0`,
/// enforced at construction and on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    inner_radius: f64,
    outer_radius: f64,
    length: f64,
    centroid: Point3,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            inner_radius: 0.0,
            outer_radius: 0.0,
            length: 0.0,
            centroid: Point3::default(),
        }
    }
}

impl Geometry {
    pub fn new(
        inner_radius: f64,
        outer_radius: f64,
        length: f64,
        centroid: Point3,
    ) -> GenRepoResult<Self> {
        if inner_radius < 0.0 || outer_radius < inner_radius {
            return Err(GenRepoError::InvalidGeometry {
                reason: format!(
                    "radii must satisfy 0 <= inner <= outer, got inner={}, outer={}",
                    inner_radius, outer_radius
                ),
            });
        }
        if length < 0.0 {
            return Err(GenRepoError::InvalidGeometry {
                reason: format!("length must be non-negative, got {}", length),
            });
        }
        Ok(Self {
            inner_radius,
            outer_radius,
            length,
            centroid,
        })
    }

    /// Deep copy of `src` with a possibly different centroid.
    pub fn copy_with_centroid(src: &Geometry, centroid: Point3) -> Self {
        Self {
            centroid,
            ..src.clone()
        }
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn centroid(&self) -> Point3 {
        self.centroid
    }

    pub fn x(&self) -> f64 {
        self.centroid.x
    }

    pub fn y(&self) -> f64 {
        self.centroid.y
    }

    pub fn z(&self) -> f64 {
        self.centroid.z
    }

    pub fn set_radii(&mut self, inner: f64, outer: f64) -> GenRepoResult<()> {
        let updated = Geometry::new(inner, outer, self.length, self.centroid)?;
        *self = updated;
        Ok(())
    }

    pub fn set_length(&mut self, length: f64) -> GenRepoResult<()> {
        let updated = Geometry::new(self.inner_radius, self.outer_radius, length, self.centroid)?;
        *self = updated;
        Ok(())
    }

    pub fn set_centroid(&mut self, centroid: Point3) {
        self.centroid = centroid;
    }

    /// Volume of the shell, clamped non-negative.
    pub fn volume(&self) -> f64 {
        let v = PI
            * self.length
            * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius);
        v.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn shell_volume() {
        let geom = Geometry::new(0.5, 1.0, 2.0, Point3::default()).unwrap();
        let expected = PI * 2.0 * (1.0 - 0.25);
        assert!(is_close!(geom.volume(), expected));
    }

    #[test]
    fn solid_cylinder_volume() {
        let geom = Geometry::new(0.0, 1.0, 1.0, Point3::default()).unwrap();
        assert!(is_close!(geom.volume(), PI));
    }

    #[test]
    fn degenerate_volume_is_zero() {
        let geom = Geometry::default();
        assert_eq!(geom.volume(), 0.0);
    }

    #[test]
    fn rejects_inverted_radii() {
        let res = Geometry::new(2.0, 1.0, 1.0, Point3::default());
        assert!(matches!(res, Err(GenRepoError::InvalidGeometry { .. })));
    }

    #[test]
    fn rejects_negative_length() {
        let res = Geometry::new(0.0, 1.0, -1.0, Point3::default());
        assert!(matches!(res, Err(GenRepoError::InvalidGeometry { .. })));
    }

    #[test]
    fn copy_with_centroid_keeps_radii() {
        let src = Geometry::new(0.1, 0.5, 3.0, Point3::new(1.0, 2.0, 3.0)).unwrap();
        let moved = Geometry::copy_with_centroid(&src, Point3::new(0.0, 0.0, -10.0));
        assert_eq!(moved.inner_radius(), 0.1);
        assert_eq!(moved.outer_radius(), 0.5);
        assert_eq!(moved.length(), 3.0);
        assert_eq!(moved.z(), -10.0);
    }
}
