pub use crate::mechanics::{
    drive_navigate::NavigateBoost,
    simple_steer_towards::{simple_steer_towards, SimpleDrive},
};

use crate::game::CarState;
use common::CarInput;
use nalgebra::Point2;

mod drive_navigate;
mod simple_steer_towards;

/// Point-to-point driving controller: produce controls that move the car to
/// `target_loc`, aiming to arrive in `target_time` seconds when that's
/// feasible. The tuned PD controllers that usually implement this live
/// outside this crate; [`SimpleDrive`] is the in-tree reference.
pub trait Drive: Send {
    fn name(&self) -> &'static str;

    fn get_controls(&mut self, car: &CarState, target_loc: Point2<f32>, target_time: f32)
        -> CarInput;

    /// Whether the controller has given up. [`NavigateBoost`] never fails
    /// on its own; it only propagates this.
    fn failed(&self) -> bool {
        false
    }
}
