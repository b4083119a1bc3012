//! The circle primitive a scene host is asked to create.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::triangulated::Triangulated3D;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// Tessellation used for every circle unless told otherwise.
pub const DEFAULT_VERTICES: usize = 64;

/// A flat circle approximated by `vertices` points, lying in the plane
/// `z = location.z` and centered on `location`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub radius: Real,
    pub location: Point3<Real>,
    pub vertices: usize,
}

impl CirclePrimitive {
    /// Checked constructor.
    ///
    /// Rejects a non-finite or non-positive `radius`, a `location` with a NaN or
    /// infinite coordinate, and fewer than three `vertices`.
    pub fn new(
        radius: Real,
        location: Point3<Real>,
        vertices: usize,
    ) -> Result<Self, ValidationError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ValidationError::NonPositiveRadius(radius));
        }
        if location.iter().any(|c| !c.is_finite()) {
            return Err(ValidationError::InvalidCoordinate(location));
        }
        if vertices < 3 {
            return Err(ValidationError::TooFewVertices(vertices));
        }
        Ok(Self { radius, location, vertices })
    }

    /// Re-run the constructor checks on an existing value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::new(self.radius, self.location, self.vertices).map(|_| ())
    }

    /// Outline points, counter-clockwise, starting on the +X side of the center.
    pub fn ring(&self) -> Vec<Point3<Real>> {
        (0..self.vertices)
            .map(|i| {
                let theta = TAU * (i as Real) / (self.vertices as Real);
                let (sin, cos) = theta.sin_cos();
                Point3::new(
                    self.location.x + self.radius * cos,
                    self.location.y + self.radius * sin,
                    self.location.z,
                )
            })
            .collect()
    }

    /// Bounds of the tessellated outline (not of the ideal circle).
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(&self.ring()).unwrap_or(Aabb::new(self.location, self.location))
    }
}

/// Triangle fan from the center, one triangle per outline edge, facing +Z.
impl Triangulated3D for CirclePrimitive {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        let normal = Vector3::z();
        let center = Vertex::new(self.location, normal);
        let ring = self.ring();
        for (i, p) in ring.iter().enumerate() {
            let next = ring[(i + 1) % ring.len()];
            f([center, Vertex::new(*p, normal), Vertex::new(next, normal)]);
        }
    }

    fn triangle_count(&self) -> usize {
        self.vertices
    }
}
