use crate::game::CarState;
use common::prelude::*;
use nalgebra::{Point3, Vector3};
use simulate::max_distance;

/// We don't want the center of the car to be at the center of the ball —
/// we want their meshes to barely be touching.
const RADII: f32 = 240.0;

/// A ball this low can be played without leaving the ground.
const NEAR_GROUND_Z: f32 = 120.0;

/// One row of an externally supplied prediction table. Rows are ordered by
/// increasing time; the table is read-only input and never kept across
/// ticks.
#[derive(Copy, Clone, Debug)]
pub struct TrajectorySample {
    /// Seconds from now.
    pub time: f32,
    pub loc: Point3<f32>,
    pub vel: Vector3<f32>,
}

#[derive(Copy, Clone, Debug)]
pub struct Intercept {
    pub time: f32,
    pub loc: Point3<f32>,
    pub vel: Vector3<f32>,
    /// False only for the best-effort fallback when no sample is reachable.
    pub reachable: bool,
}

/// The earliest sample the car can reach in time, among samples accepted by
/// `predicate`.
///
/// This treats the car as already pointing at the target: straight-line
/// distance compared against the 1D drive model. It's a heuristic lower
/// bound on feasibility rather than an optimal-control solve, and consumers
/// are tuned against exactly this approximation — re-evaluate it every tick
/// instead of trusting an old verdict.
pub fn intercept(
    car: &CarState,
    samples: &[TrajectorySample],
    predicate: impl Fn(&TrajectorySample) -> bool,
) -> Option<Intercept> {
    samples
        .iter()
        .filter(|sample| predicate(sample))
        .find(|sample| {
            let required = (sample.loc.to_2d() - car.loc_2d()).norm() - RADII;
            required <= max_distance(sample.time, car.vel.norm(), car.boost)
        })
        .map(|sample| Intercept {
            time: sample.time,
            loc: sample.loc,
            vel: sample.vel,
            reachable: true,
        })
}

/// [`intercept`] restricted to samples near the ground. When nothing
/// qualifies this falls back to the table's first sample so callers always
/// have something to drive toward, flagged `reachable: false`.
pub fn ground_intercept(car: &CarState, samples: &[TrajectorySample]) -> Option<Intercept> {
    if let Some(hit) = intercept(car, samples, |sample| sample.loc.z < NEAR_GROUND_Z) {
        return Some(hit);
    }

    samples.first().map(|sample| Intercept {
        time: sample.time,
        loc: sample.loc,
        vel: sample.vel,
        reachable: false,
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        game::CarState,
        predict::intercept::{ground_intercept, RADII},
        predict::TrajectorySample,
    };
    use nalgebra::{Point3, UnitQuaternion, Vector3};
    use simulate::max_distance;

    fn car_at_rest(boost: f32) -> CarState {
        CarState {
            loc: Point3::new(0.0, 0.0, 17.01),
            rot: UnitQuaternion::identity(),
            vel: Vector3::new(0.0, 0.0, 0.0),
            ang_vel: Vector3::new(0.0, 0.0, 0.0),
            boost,
        }
    }

    fn rolling_ball(time: f32, x: f32) -> TrajectorySample {
        TrajectorySample {
            time,
            loc: Point3::new(x, 0.0, 92.0),
            vel: Vector3::new(500.0, 0.0, 0.0),
        }
    }

    #[test]
    fn picks_earliest_reachable_sample() {
        let car = car_at_rest(100.0);
        let reach_2 = max_distance(2.0, 0.0, 100.0);
        let samples = vec![
            // Too far away this early.
            rolling_ball(1.0, 8000.0),
            // Just inside reach.
            rolling_ball(2.0, reach_2 + RADII - 1.0),
            rolling_ball(3.0, 9000.0),
        ];

        let hit = ground_intercept(&car, &samples).unwrap();
        assert!(hit.reachable);
        assert_eq!(hit.time, 2.0);
    }

    #[test]
    fn boundary_flips_between_adjacent_samples() {
        let car = car_at_rest(100.0);
        let reach_2 = max_distance(2.0, 0.0, 100.0);

        let barely_out = vec![rolling_ball(2.0, reach_2 + RADII + 10.0), rolling_ball(3.0, 9000.0)];
        let hit = ground_intercept(&car, &barely_out).unwrap();
        assert!(!hit.reachable);
        assert_eq!(hit.time, 2.0); // fallback to the first sample

        let barely_in = vec![rolling_ball(2.0, reach_2 + RADII - 10.0), rolling_ball(3.0, 9000.0)];
        let hit = ground_intercept(&car, &barely_in).unwrap();
        assert!(hit.reachable);
        assert_eq!(hit.time, 2.0);
    }

    #[test]
    fn airborne_samples_are_skipped() {
        let car = car_at_rest(100.0);
        let mut high = rolling_ball(1.0, 500.0);
        high.loc.z = 800.0;
        let samples = vec![high, rolling_ball(2.0, 600.0)];

        let hit = ground_intercept(&car, &samples).unwrap();
        assert!(hit.reachable);
        assert_eq!(hit.time, 2.0);
    }

    #[test]
    fn unreachable_falls_back_to_first_sample() {
        let car = car_at_rest(0.0);
        let samples = vec![rolling_ball(0.0, 20000.0), rolling_ball(1.0, 20000.0)];

        let hit = ground_intercept(&car, &samples).unwrap();
        assert!(!hit.reachable);
        assert_eq!(hit.time, 0.0);
        assert_eq!(hit.loc.x, 20000.0);
    }

    #[test]
    fn empty_table_gives_nothing() {
        let car = car_at_rest(100.0);
        assert!(ground_intercept(&car, &[]).is_none());
    }
}
