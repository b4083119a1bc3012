//! Polar ⇄ Cartesian conversion in the XY plane.
//!
//! Angles are in **degrees**, measured counter-clockwise from +X.

use crate::float_types::{FULL_TURN_DEGREES, Real, tolerance};
use nalgebra::{Point2, Point3};

/// Point at `radius` along the direction `angle_degrees`.
///
/// Defined for every real input; a negative radius lands on the opposite side.
///
/// ```
/// # use rosette::polar::polar_to_cartesian;
/// let p = polar_to_cartesian(3.0, 180.0);
/// assert!((p.x + 3.0).abs() < 1e-9 && p.y.abs() < 1e-9);
/// ```
#[inline]
pub fn polar_to_cartesian(radius: Real, angle_degrees: Real) -> Point2<Real> {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Point2::new(radius * cos, radius * sin)
}

/// Same as [`polar_to_cartesian`], lifted onto the z = 0 plane.
#[inline]
pub fn polar_to_point3(radius: Real, angle_degrees: Real) -> Point3<Real> {
    let p = polar_to_cartesian(radius, angle_degrees);
    Point3::new(p.x, p.y, 0.0)
}

/// Inverse conversion: `(radius, angle_degrees)` with the angle in `[0, 360)`.
///
/// Points closer to the origin than [`tolerance`] map to `(0, 0)`.
pub fn cartesian_to_polar(point: Point2<Real>) -> (Real, Real) {
    let radius = point.coords.norm();
    if radius < tolerance() {
        return (0.0, 0.0);
    }
    let angle = point.y.atan2(point.x).to_degrees().rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly one full turn for tiny negative angles
    let angle = if angle >= FULL_TURN_DEGREES { 0.0 } else { angle };
    (radius, angle)
}
