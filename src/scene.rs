//! Triangle scenes.
//!
//! A [`Scene`] owns its triangle list for its whole lifetime; loading a new
//! model replaces the scene wholesale, and the storage is reclaimed when the
//! scene is dropped.

use crate::colors;
use crate::math::vec3::Vec3;

/// A single colored triangle with its face normal.
///
/// The normal is consulted only when back-face culling is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    /// Packed ARGB8888.
    pub color: u32,
    pub normal: Vec3,
}

impl Triangle {
    /// Builds a triangle, deriving the face normal from the winding.
    pub fn new(color: u32, a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self {
            a,
            b,
            c,
            color,
            normal,
        }
    }

    /// Builds a triangle with a normal supplied by the model file.
    pub fn with_normal(color: u32, a: Vec3, b: Vec3, c: Vec3, normal: Vec3) -> Self {
        Self {
            a,
            b,
            c,
            color,
            normal,
        }
    }
}

/// An ordered triangle list, fixed in size once loaded.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// A scene with no geometry, used when no model could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fallback model: a cube spanning [-1, 1] on every axis, two
    /// triangles per face, alternating red and white.
    ///
    /// The vertex orderings are not consistently wound, so each face's
    /// outward normal is supplied explicitly rather than derived; both
    /// triangles of a face must agree for back-face culling to treat the
    /// face as one surface.
    pub fn unit_cube() -> Self {
        // Front corners.
        let p1 = Vec3::new(1.0, 1.0, 1.0);
        let p2 = Vec3::new(1.0, -1.0, 1.0);
        let p3 = Vec3::new(-1.0, 1.0, 1.0);
        let p4 = Vec3::new(-1.0, -1.0, 1.0);
        // Back corners.
        let p5 = Vec3::new(1.0, 1.0, -1.0);
        let p6 = Vec3::new(1.0, -1.0, -1.0);
        let p7 = Vec3::new(-1.0, 1.0, -1.0);
        let p8 = Vec3::new(-1.0, -1.0, -1.0);

        let front = Vec3::new(0.0, 0.0, 1.0);
        let back = Vec3::new(0.0, 0.0, -1.0);
        let left = Vec3::new(-1.0, 0.0, 0.0);
        let right = Vec3::new(1.0, 0.0, 0.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        let down = Vec3::new(0.0, -1.0, 0.0);

        Self::new(vec![
            // Front face
            Triangle::with_normal(colors::RED, p1, p4, p3, front),
            Triangle::with_normal(colors::WHITE, p2, p1, p4, front),
            // Left face
            Triangle::with_normal(colors::RED, p3, p4, p8, left),
            Triangle::with_normal(colors::WHITE, p7, p8, p3, left),
            // Top face
            Triangle::with_normal(colors::RED, p1, p3, p5, up),
            Triangle::with_normal(colors::WHITE, p3, p5, p7, up),
            // Back face
            Triangle::with_normal(colors::RED, p5, p7, p6, back),
            Triangle::with_normal(colors::WHITE, p8, p7, p6, back),
            // Right face
            Triangle::with_normal(colors::RED, p1, p2, p5, right),
            Triangle::with_normal(colors::WHITE, p2, p5, p6, right),
            // Bottom face
            Triangle::with_normal(colors::RED, p2, p8, p4, down),
            Triangle::with_normal(colors::WHITE, p2, p8, p6, down),
        ])
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Permutes the axes of every vertex and normal in place: x takes the
    /// old y, y the old z, z the old x. Applying it three times restores
    /// the original orientation.
    pub fn swap_axes(&mut self) {
        fn cycle(v: Vec3) -> Vec3 {
            Vec3::new(v.y, v.z, v.x)
        }

        for triangle in &mut self.triangles {
            triangle.a = cycle(triangle.a);
            triangle.b = cycle(triangle.b);
            triangle.c = cycle(triangle.c);
            triangle.normal = cycle(triangle.normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_cube_has_twelve_triangles() {
        assert_eq!(Scene::unit_cube().len(), 12);
    }

    #[test]
    fn cube_normals_are_unit_length() {
        for triangle in Scene::unit_cube().triangles() {
            assert_relative_eq!(triangle.normal.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn cube_normals_point_outward() {
        // The cube is centered on the origin, so an outward normal has a
        // positive dot product with its triangle's centroid.
        for triangle in Scene::unit_cube().triangles() {
            let centroid = (triangle.a + triangle.b + triangle.c) * (1.0 / 3.0);
            assert!(
                triangle.normal.dot(centroid) > 0.0,
                "inward-facing normal {:?}",
                triangle.normal
            );
        }
    }

    #[test]
    fn cube_face_pairs_share_one_normal() {
        // Triangles come in coplanar pairs (two per face); culling must see
        // the same normal on both, front face included.
        let scene = Scene::unit_cube();
        let triangles = scene.triangles();
        for pair in triangles.chunks(2) {
            assert_eq!(pair[0].normal, pair[1].normal);
        }
        assert!(triangles[0].normal.z > 0.0);
        assert!(triangles[1].normal.z > 0.0);
    }

    #[test]
    fn derived_normal_is_perpendicular_to_edges() {
        let t = Triangle::new(
            colors::WHITE,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(t.normal.dot(t.b - t.a), 0.0, epsilon = 1e-6);
        assert_relative_eq!(t.normal.dot(t.c - t.a), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn swap_axes_cycles_after_three_applications() {
        let mut scene = Scene::unit_cube();
        let before = scene.triangles().to_vec();
        scene.swap_axes();
        assert_ne!(scene.triangles(), &before[..]);
        scene.swap_axes();
        scene.swap_axes();
        assert_eq!(scene.triangles(), &before[..]);
    }

    #[test]
    fn swap_axes_permutes_components() {
        let mut scene = Scene::new(vec![Triangle::with_normal(
            colors::RED,
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, 1.0),
        )]);
        scene.swap_axes();
        assert_eq!(scene.triangles()[0].a, Vec3::new(2.0, 3.0, 1.0));
        assert_eq!(scene.triangles()[0].normal, Vec3::new(0.0, 1.0, 0.0));
    }
}
