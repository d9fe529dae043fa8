//! Polygon meshes sampled from analytic shapes.
//!
//! A [`Mesh`] is the render-side view of a [`crate::Shape`]: a vertex list in
//! object space (millimeters, shape center baked in) and a list of polygon
//! faces indexing into it. Faces keep a consistent winding so that the
//! renderer can derive an outward normal from the first, second, and last
//! vertex of each face.
//!
//! Meshes are derived data. Regenerate one whenever the shape's parameters
//! change; within a frame it is immutable.

use crate::vec3::Vec3;

/// Vertex positions plus polygon faces, each face an ordered list of at
/// least three vertex indices.
///
/// Winding convention: faces are counter-clockwise when viewed from outside
/// the solid, so `(v[1] - v[0]) × (v[last] - v[0])` points outward.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// A latitude/longitude sphere grid: `segments + 1` rings of
    /// `segments + 1` vertices, adjacent rings joined into quad faces.
    ///
    /// The seam column and both pole rows carry duplicate vertices. The
    /// duplicates are intentional: the grid matches the analytic sphere
    /// exactly in the limit, and the zero-area pole quads are skipped by the
    /// renderer as degenerate faces rather than triangulated specially.
    pub fn sphere(center: Vec3, radius: f64, segments: u32) -> Self {
        let segments = segments.max(3) as usize;
        let ring_len = segments + 1;

        let mut vertices = Vec::with_capacity(ring_len * ring_len);
        for i in 0..ring_len {
            let lat = std::f64::consts::PI * i as f64 / segments as f64;
            for j in 0..ring_len {
                let lon = std::f64::consts::TAU * j as f64 / segments as f64;
                vertices.push(
                    center
                        + Vec3::new(
                            radius * lat.sin() * lon.cos(),
                            radius * lat.cos(),
                            radius * lat.sin() * lon.sin(),
                        ),
                );
            }
        }

        let mut faces = Vec::with_capacity(segments * segments);
        for i in 0..segments {
            for j in 0..segments {
                let p1 = i * ring_len + j;
                let p2 = p1 + ring_len;
                faces.push(vec![p1, p1 + 1, p2 + 1, p2]);
            }
        }

        Self { vertices, faces }
    }

    /// The eight corners of an axis-aligned cube and its six quad faces,
    /// wound counter-clockwise from outside.
    pub fn cube(center: Vec3, half_extent: f64) -> Self {
        let r = half_extent;
        #[rustfmt::skip]
        let corners = [
            (-r, -r,  r), ( r, -r,  r), ( r,  r,  r), (-r,  r,  r),
            (-r, -r, -r), ( r, -r, -r), ( r,  r, -r), (-r,  r, -r),
        ];
        let vertices = corners
            .iter()
            .map(|&(x, y, z)| center + Vec3::new(x, y, z))
            .collect();

        #[rustfmt::skip]
        let faces = vec![
            vec![0, 1, 2, 3], // +z
            vec![1, 5, 6, 2], // +x
            vec![5, 4, 7, 6], // -z
            vec![4, 0, 3, 7], // -x
            vec![3, 2, 6, 7], // +y
            vec![4, 5, 1, 0], // -y
        ];

        Self { vertices, faces }
    }
}
