//! The flower generator: one central circle plus a ring of circles placed
//! by polar coordinates.
//!
//! The ring is walked with an angle accumulator bounded by an inequality,
//! not by an iteration count. When the step divides a full turn you get
//! exactly `360 / step` petals. When it does not, you get `ceil(360 / step)`
//! petals and the last one stops short of a full turn; nothing snaps it.

use crate::errors::{FlowerError, ValidationError};
use crate::float_types::{FULL_TURN_DEGREES, Real};
use crate::polar::polar_to_point3;
use crate::primitive::{CirclePrimitive, DEFAULT_VERTICES};
use crate::scene::SceneContext;
use log::{debug, info};
use nalgebra::Point3;

/// Radius used when nothing else is asked for, in scene units.
pub const DEFAULT_RADIUS: Real = 3.0;
/// Angular step between petals, in degrees.
pub const DEFAULT_ANGULAR_STEP: Real = 60.0;
/// Upper bound on petals per flower; smaller steps are rejected.
pub const MAX_PETALS: usize = 100_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerParams {
    /// Radius of every circle and of the ring their centers sit on.
    pub radius: Real,
    /// Angle of the first petal, in degrees.
    pub start_angle: Real,
    /// Degrees added to the accumulator after each petal.
    pub angular_step: Real,
    /// Tessellation of each circle.
    pub vertices: usize,
}

impl Default for FlowerParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            start_angle: 0.0,
            angular_step: DEFAULT_ANGULAR_STEP,
            vertices: DEFAULT_VERTICES,
        }
    }
}

impl FlowerParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ValidationError::NonPositiveRadius(self.radius));
        }
        if !self.angular_step.is_finite() || self.angular_step <= 0.0 {
            return Err(ValidationError::NonPositiveStep(self.angular_step));
        }
        if !self.start_angle.is_finite() {
            return Err(ValidationError::InvalidAngle(self.start_angle));
        }
        let start = self.start_angle;
        let end = start + FULL_TURN_DEGREES;
        if end <= start {
            return Err(ValidationError::AngleOutOfRange(start));
        }
        // the step must exceed one ulp at the largest magnitude the accumulator
        // visits, otherwise additions round away (or tie) and the loop stalls
        let widest = start.abs().max(end.abs());
        if FULL_TURN_DEGREES / self.angular_step > MAX_PETALS as Real
            || self.angular_step <= widest * Real::EPSILON
        {
            return Err(ValidationError::StepTooSmall { step: self.angular_step, start });
        }
        if self.vertices < 3 {
            return Err(ValidationError::TooFewVertices(self.vertices));
        }
        Ok(())
    }

    /// Angles visited by the placement loop, in order.
    ///
    /// Parameters are validated first, so the accumulator always reaches the bound.
    pub fn ring_angles(&self) -> Result<Vec<Real>, ValidationError> {
        self.validate()?;
        let end = self.start_angle + FULL_TURN_DEGREES;
        let mut angles = Vec::new();
        let mut angle = self.start_angle;
        while angle < end {
            angles.push(angle);
            angle += self.angular_step;
        }
        Ok(angles)
    }

    /// The circle placed at the origin.
    pub fn center_circle(&self) -> Result<CirclePrimitive, ValidationError> {
        CirclePrimitive::new(self.radius, Point3::origin(), self.vertices)
    }

    /// The petal for a given accumulator value.
    pub fn petal(&self, angle: Real) -> Result<CirclePrimitive, ValidationError> {
        CirclePrimitive::new(self.radius, polar_to_point3(self.radius, angle), self.vertices)
    }
}

/// What [`build_flower`] placed.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerSummary {
    pub center: Point3<Real>,
    /// `(angle in degrees, location)` for each petal, in placement order.
    pub petals: Vec<(Real, Point3<Real>)>,
}

impl FlowerSummary {
    /// Number of primitives created, center included.
    pub fn total(&self) -> usize {
        1 + self.petals.len()
    }
}

/// Clear `scene`, then place the central circle and the ring of petals.
///
/// Calls go to the scene strictly in order: one `reset`, the center, then the
/// petals by increasing angle. The first failing call stops the procedure and
/// its error is returned as is; whatever was already placed stays in the scene.
pub fn build_flower<C>(scene: &mut C, params: &FlowerParams) -> Result<FlowerSummary, FlowerError>
where
    C: SceneContext + ?Sized,
{
    params.validate()?;

    scene.reset()?;

    let center = params.center_circle()?;
    scene.place_circle(center)?;
    debug!("placed center circle r={} at {:?}", params.radius, center.location);

    let mut petals = Vec::new();
    for angle in params.ring_angles()? {
        let petal = params.petal(angle)?;
        scene.place_circle(petal)?;
        debug!("placed petal at {angle}° -> ({:.6}, {:.6})", petal.location.x, petal.location.y);
        petals.push((angle, petal.location));
    }

    let summary = FlowerSummary { center: center.location, petals };
    info!(
        "flower built: {} circles (r={}, step={}°, {} vertices each)",
        summary.total(),
        params.radius,
        params.angular_step,
        params.vertices
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_reference_constants() {
        let p = FlowerParams::default();
        assert_eq!(p.radius, 3.0);
        assert_eq!(p.start_angle, 0.0);
        assert_eq!(p.angular_step, 60.0);
        assert_eq!(p.vertices, 64);
    }

    #[test]
    fn default_ring_angles_stop_before_full_turn() {
        let angles = FlowerParams::default().ring_angles().unwrap();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
        assert!(!angles.contains(&360.0));
    }

    #[test]
    fn non_divisor_step_rounds_up() {
        let p = FlowerParams { angular_step: 7.0, ..Default::default() };
        let angles = p.ring_angles().unwrap();
        assert_eq!(angles.len(), 52);
        assert_eq!(*angles.last().unwrap(), 357.0);

        let p = FlowerParams { angular_step: 100.0, ..Default::default() };
        assert_eq!(p.ring_angles().unwrap(), vec![0.0, 100.0, 200.0, 300.0]);
    }

    #[test]
    fn step_larger_than_a_turn_gives_one_petal() {
        let p = FlowerParams { angular_step: 720.0, ..Default::default() };
        assert_eq!(p.ring_angles().unwrap(), vec![0.0]);
    }

    #[test]
    fn start_angle_shifts_the_whole_turn() {
        let p = FlowerParams { start_angle: 30.0, ..Default::default() };
        assert_eq!(p.ring_angles().unwrap(), vec![30.0, 90.0, 150.0, 210.0, 270.0, 330.0]);
    }

    #[test]
    fn validation() {
        let bad_step = FlowerParams { angular_step: 0.0, ..Default::default() };
        assert_eq!(bad_step.validate(), Err(ValidationError::NonPositiveStep(0.0)));
        assert_eq!(bad_step.ring_angles(), Err(ValidationError::NonPositiveStep(0.0)));

        let bad_radius = FlowerParams { radius: -3.0, ..Default::default() };
        assert_eq!(bad_radius.validate(), Err(ValidationError::NonPositiveRadius(-3.0)));

        let bad_start = FlowerParams { start_angle: Real::NAN, ..Default::default() };
        assert!(matches!(bad_start.validate(), Err(ValidationError::InvalidAngle(_))));

        let bad_vertices = FlowerParams { vertices: 1, ..Default::default() };
        assert_eq!(bad_vertices.validate(), Err(ValidationError::TooFewVertices(1)));
    }

    #[test]
    fn step_lost_to_rounding_is_rejected() {
        // one ulp at 1e18 is 128, so adding 60 never moves the accumulator
        let p = FlowerParams { start_angle: 1e18, ..Default::default() };
        assert_eq!(
            p.validate(),
            Err(ValidationError::StepTooSmall { step: 60.0, start: 1e18 })
        );
        assert!(p.ring_angles().is_err());

        let p = FlowerParams { start_angle: -1e18, ..Default::default() };
        assert!(matches!(p.validate(), Err(ValidationError::StepTooSmall { .. })));
    }

    #[test]
    fn start_angle_without_room_for_a_turn_is_rejected() {
        let p = FlowerParams { start_angle: 1e20, ..Default::default() };
        assert_eq!(p.validate(), Err(ValidationError::AngleOutOfRange(1e20)));
    }

    #[test]
    fn tiny_steps_are_rejected() {
        let p = FlowerParams { angular_step: 1e-300, ..Default::default() };
        assert!(matches!(p.validate(), Err(ValidationError::StepTooSmall { .. })));

        let smallest = FULL_TURN_DEGREES / MAX_PETALS as Real;
        let p = FlowerParams { angular_step: smallest * 1.5, ..Default::default() };
        assert!(p.validate().is_ok());
        let p = FlowerParams { angular_step: smallest / 2.0, ..Default::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn large_but_workable_start_still_walks_a_turn() {
        let p = FlowerParams { start_angle: 1e6, ..Default::default() };
        assert_eq!(p.ring_angles().unwrap().len(), 6);
    }
}
