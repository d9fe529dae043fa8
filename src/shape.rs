//! Analytic solid shapes with exact signed-distance functions.
//!
//! A [`Shape`] answers two questions: how far is a point from my surface
//! (signed, negative inside), and what does my surface look like as a
//! polygon mesh. The distance feeds the actuator mapping in
//! [`crate::feedback`]; the mesh feeds the viewport in [`crate::renderer`].
//!
//! The variant set is closed on purpose. Any convex solid with an SDF could
//! slot in, but the rig only ever renders and queries one sphere or one cube
//! at a time.

use thiserror::Error;

use crate::mesh::Mesh;
use crate::vec3::Vec3;

/// Default tessellation quality for [`Shape::mesh`].
pub const DEFAULT_SEGMENTS: u32 = 16;

/// Errors from shape construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    /// Sphere radius must be strictly positive.
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    /// Cube half-extent must be strictly positive.
    #[error("cube half-extent must be positive, got {0}")]
    NonPositiveHalfExtent(f64),
}

/// A solid described by an exact signed-distance function.
///
/// Construct through [`Shape::sphere`] or [`Shape::cube`]; both reject
/// non-positive dimensions so a degenerate or negative-volume solid can
/// never exist.
///
/// # Example
///
/// ```
/// use haptos::{Shape, Vec3};
///
/// let sphere = Shape::sphere(Vec3::ZERO, 90.0).unwrap();
/// assert_eq!(sphere.signed_distance(Vec3::new(100.0, 0.0, 0.0)), 10.0);
/// assert_eq!(sphere.signed_distance(Vec3::ZERO), -90.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A sphere of `radius` around `center`.
    Sphere { center: Vec3, radius: f64 },
    /// An axis-aligned cube reaching `half_extent` from `center` on every axis.
    Cube { center: Vec3, half_extent: f64 },
}

impl Shape {
    /// Creates a sphere, rejecting a non-positive radius.
    pub fn sphere(center: Vec3, radius: f64) -> Result<Self, ShapeError> {
        if radius <= 0.0 {
            return Err(ShapeError::NonPositiveRadius(radius));
        }
        Ok(Self::Sphere { center, radius })
    }

    /// Creates an axis-aligned cube, rejecting a non-positive half-extent.
    pub fn cube(center: Vec3, half_extent: f64) -> Result<Self, ShapeError> {
        if half_extent <= 0.0 {
            return Err(ShapeError::NonPositiveHalfExtent(half_extent));
        }
        Ok(Self::Cube { center, half_extent })
    }

    /// Signed distance from `point` to the surface, in the same units as the
    /// shape itself (millimeters throughout this crate).
    ///
    /// Negative inside the solid, zero on the surface, positive outside.
    /// Continuous everywhere, including across cube edges and corners.
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        match *self {
            Shape::Sphere { center, radius } => (point - center).length() - radius,
            Shape::Cube { center, half_extent } => {
                // Exact box SDF: component distances to the slab boundaries,
                // split into the outside length and the inside depth.
                let d = (point - center).abs() - Vec3::splat(half_extent);
                let outside = d.max(Vec3::ZERO).length();
                let inside = d.max_element().min(0.0);
                outside + inside
            }
        }
    }

    /// Samples the surface into a polygon mesh for rendering.
    ///
    /// `segments` controls tessellation quality for curved surfaces
    /// ([`DEFAULT_SEGMENTS`] is a reasonable default); the cube ignores it.
    /// The mesh is built in full before being returned, so a caller swapping
    /// meshes never observes a partial one.
    pub fn mesh(&self, segments: u32) -> Mesh {
        match *self {
            Shape::Sphere { center, radius } => Mesh::sphere(center, radius, segments),
            Shape::Cube { center, half_extent } => Mesh::cube(center, half_extent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn construction_rejects_degenerate_dimensions() {
        assert_eq!(
            Shape::sphere(Vec3::ZERO, 0.0),
            Err(ShapeError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            Shape::sphere(Vec3::ZERO, -1.0),
            Err(ShapeError::NonPositiveRadius(-1.0))
        );
        assert_eq!(
            Shape::cube(Vec3::ZERO, 0.0),
            Err(ShapeError::NonPositiveHalfExtent(0.0))
        );
        assert!(Shape::sphere(Vec3::ZERO, 1e-9).is_ok());
    }

    #[test]
    fn sphere_distance_matches_definition() {
        let center = Vec3::new(10.0, -5.0, 2.0);
        let sphere = Shape::sphere(center, 80.0).unwrap();

        for p in [
            Vec3::new(200.0, 3.0, -40.0),
            Vec3::new(-17.0, 12.0, 90.0),
            center,
        ] {
            assert_relative_eq!(
                sphere.signed_distance(p),
                (p - center).length() - 80.0,
                max_relative = 1e-12
            );
        }

        // Exactly on the surface.
        let on_surface = center + Vec3::X * 80.0;
        assert_abs_diff_eq!(sphere.signed_distance(on_surface), 0.0);

        // Sign matches inside/outside.
        assert!(sphere.signed_distance(center) < 0.0);
        assert!(sphere.signed_distance(center + Vec3::Y * 81.0) > 0.0);
    }

    #[test]
    fn cube_distance_is_zero_on_face_centers() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let r = 40.0;
        let cube = Shape::cube(center, r).unwrap();

        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            assert_abs_diff_eq!(cube.signed_distance(center + axis * r), 0.0);
            assert_abs_diff_eq!(cube.signed_distance(center - axis * r), 0.0);
        }
    }

    #[test]
    fn cube_distance_signs_and_exact_values() {
        let cube = Shape::cube(Vec3::ZERO, 10.0).unwrap();

        // Inside: distance to the nearest face.
        assert_abs_diff_eq!(cube.signed_distance(Vec3::ZERO), -10.0);
        assert_abs_diff_eq!(cube.signed_distance(Vec3::new(8.0, 0.0, 0.0)), -2.0);

        // Outside a face: the slab distance.
        assert_abs_diff_eq!(cube.signed_distance(Vec3::new(15.0, 0.0, 0.0)), 5.0);

        // Outside a corner: Euclidean distance to the corner.
        let corner = Vec3::splat(10.0);
        let p = Vec3::splat(13.0);
        assert_relative_eq!(cube.signed_distance(p), (p - corner).length());
    }

    #[test]
    fn cube_distance_is_continuous_across_boundaries() {
        let cube = Shape::cube(Vec3::ZERO, 10.0).unwrap();
        let eps = 1e-6;

        // An SDF is 1-Lipschitz: points eps apart may differ by at most eps.
        // Probe pairs straddling a face, an edge, and a corner.
        let pairs = [
            (Vec3::new(10.0 - eps, 0.0, 0.0), Vec3::new(10.0 + eps, 0.0, 0.0)),
            (
                Vec3::new(10.0 - eps, 10.0 - eps, 0.0),
                Vec3::new(10.0 + eps, 10.0 + eps, 0.0),
            ),
            (Vec3::splat(10.0 - eps), Vec3::splat(10.0 + eps)),
        ];
        for (a, b) in pairs {
            let jump = (cube.signed_distance(a) - cube.signed_distance(b)).abs();
            assert!(jump <= a.distance(b) + 1e-12, "jump {jump} too large");
        }
    }

    #[test]
    fn mesh_dispatch_matches_variant() {
        let sphere = Shape::sphere(Vec3::ZERO, 5.0).unwrap();
        let cube = Shape::cube(Vec3::ZERO, 5.0).unwrap();
        assert_eq!(sphere.mesh(8).vertex_count(), 81);
        assert_eq!(cube.mesh(8).vertex_count(), 8);
    }
}
