use crate::{game::CarState, mechanics::Drive};
use common::{prelude::*, rl, CarInput};
use nalgebra::Point2;
use nameof::name_of_type;

/// Proportional steering toward `target_loc`, saturating well before the
/// target is 90° off the nose.
pub fn simple_steer_towards(car: &CarState, target_loc: Point2<f32>) -> f32 {
    let target_yaw = car.loc_2d().angle_to(target_loc);
    ((target_yaw - car.yaw()).normalize_angle() * 2.0)
        .max(-1.0)
        .min(1.0)
}

/// Minimal [`Drive`] implementation: full throttle, proportional steering,
/// boost while pointed the right way and below max speed. No slides, no
/// dodges, no arrive-on-time pacing.
pub struct SimpleDrive;

impl Drive for SimpleDrive {
    fn name(&self) -> &'static str {
        name_of_type!(SimpleDrive)
    }

    fn get_controls(
        &mut self,
        car: &CarState,
        target_loc: Point2<f32>,
        _target_time: f32,
    ) -> CarInput {
        let steer = simple_steer_towards(car, target_loc);
        CarInput {
            throttle: 1.0,
            steer,
            boost: steer.abs() < 0.2 && car.vel.norm() < rl::CAR_ALMOST_MAX_SPEED,
            ..Default::default()
        }
    }
}
