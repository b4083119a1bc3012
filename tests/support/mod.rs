//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use rosette::{errors::SceneError, float_types::Real, primitive::CirclePrimitive, scene::SceneContext};
use nalgebra::Point3;

/// Returns the approximate bounding box `[min_x, min_y, min_z, max_x, max_y, max_z]`
/// for a set of points.
pub fn bounding_box(points: &[Point3<Real>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for p in points {
        bb[0] = bb[0].min(p.x);
        bb[1] = bb[1].min(p.y);
        bb[2] = bb[2].min(p.z);
        bb[3] = bb[3].max(p.x);
        bb[4] = bb[4].max(p.y);
        bb[5] = bb[5].max(p.z);
    }
    bb
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn approx_point(p: &Point3<Real>, x: Real, y: Real, z: Real) -> bool {
    approx_eq(p.x, x, 1e-9) && approx_eq(p.y, y, 1e-9) && approx_eq(p.z, z, 1e-9)
}

/// A host that fails on the `fail_on`-th placement (0-based) and counts what it saw.
#[derive(Default)]
pub struct FlakyScene {
    pub fail_on: usize,
    pub resets: usize,
    pub placed: Vec<CirclePrimitive>,
}

impl SceneContext for FlakyScene {
    fn reset(&mut self) -> Result<(), SceneError> {
        self.resets += 1;
        Ok(())
    }

    fn place_circle(&mut self, circle: CirclePrimitive) -> Result<(), SceneError> {
        if self.placed.len() == self.fail_on {
            return Err(SceneError::Host("host went away".to_string()));
        }
        self.placed.push(circle);
        Ok(())
    }
}
