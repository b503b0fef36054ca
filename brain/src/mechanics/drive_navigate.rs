use crate::{
    game::{BoostPad, CarState},
    mechanics::Drive,
    routing::fastest_path,
    utils::TickBudget,
};
use common::{prelude::*, CarInput};
use nalgebra::{Point3, Unit, Vector2};
use nameof::name_of_type;

/// Close enough, in uu, to call the destination reached.
const FINISH_DISTANCE: f32 = 25.0;

/// Close enough, in seconds, to call the arrival time met.
const FINISH_TIME: f32 = 0.05;

/// How far upstream of the target to put the aim point when the caller
/// requested an arrival direction.
const APPROACH_OFFSET: f32 = 300.0;

/// Thin navigation mechanic: re-plans a boost-aware route every call and
/// hands the next waypoint to the underlying point-to-point [`Drive`]
/// controller. Reports `finished` near the target; a failure can only come
/// from the inner controller.
pub struct NavigateBoost {
    drive: Box<dyn Drive>,
    finished: bool,
    failed: bool,
}

impl NavigateBoost {
    pub fn new(drive: impl Drive + 'static) -> Self {
        Self {
            drive: Box::new(drive),
            finished: false,
            failed: false,
        }
    }

    pub fn name(&self) -> &'static str {
        name_of_type!(NavigateBoost)
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Produce this tick's controls. `target_dt` is the desired seconds to
    /// arrival; `target_dir`, when given, is the direction to be moving at
    /// arrival.
    pub fn get_controls(
        &mut self,
        car: &CarState,
        pads: &[BoostPad],
        target_loc: Point3<f32>,
        target_dt: f32,
        target_dir: Option<Unit<Vector2<f32>>>,
    ) -> CarInput {
        let budget = TickBudget::start(self.name());

        // Ground navigation: plan on the floor plane.
        let target_loc = target_loc.to_2d();
        let route = fastest_path(pads, car, target_loc, target_dir);

        let mut aim = route.next_waypoint();
        if route.on_final_leg() {
            if let Some(dir) = route.approach() {
                // Swing the aim point upstream of the target so we arrive
                // moving the requested way.
                let dist = (target_loc - car.loc_2d()).norm();
                aim -= *dir * APPROACH_OFFSET.min(dist / 2.0);
            }
        }

        // Only pace ourselves on the final leg; a detour is driven flat
        // out.
        let time_hint = if route.on_final_leg() { target_dt } else { 0.0 };

        self.finished = (car.loc_2d() - target_loc).norm() < FINISH_DISTANCE
            && target_dt.abs() < FINISH_TIME;

        let controls = self.drive.get_controls(car, aim, time_hint);
        self.failed = self.drive.failed();

        budget.finish();
        controls
    }
}
