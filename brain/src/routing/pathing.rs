use crate::game::{BoostPad, CarState};
use arrayvec::ArrayVec;
use nalgebra::{Point2, Unit, Vector2};
use ordered_float::NotNan;
use simulate::Drive1D;

/// Leg times come out of a bisection, so two routes covering the same
/// ground can differ by a hair. A detour has to win by more than this to
/// count, which also keeps ties resolving to the direct route.
const TIME_EPS: f32 = 1e-3;

/// An ordered waypoint list from the car to a destination: at most the
/// start, one pickup detour, and the target. A pickup only ever appears
/// when taking it does not cost time versus driving straight there.
#[derive(Clone, Debug)]
pub struct Route {
    waypoints: ArrayVec<[Point2<f32>; 3]>,
    time: f32,
    pickup: Option<usize>,
    approach: Option<Unit<Vector2<f32>>>,
}

impl Route {
    /// Estimated seconds to the final target.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn waypoints(&self) -> &[Point2<f32>] {
        &self.waypoints
    }

    /// Index into the planner's pad list, when the route detours.
    pub fn pickup(&self) -> Option<usize> {
        self.pickup
    }

    /// The direction the car should be moving on arrival, if the caller
    /// asked for one. Steering flavor only — it never affects which route
    /// won.
    pub fn approach(&self) -> Option<Unit<Vector2<f32>>> {
        self.approach
    }

    /// The next location to steer toward: the pickup if detouring,
    /// otherwise the target itself.
    pub fn next_waypoint(&self) -> Point2<f32> {
        self.waypoints[1]
    }

    /// True when the next waypoint is the final target.
    pub fn on_final_leg(&self) -> bool {
        self.pickup.is_none()
    }
}

/// The fastest route from the car to `target_loc`: straight there, or via
/// exactly one boost pad. Multi-pad chains are deliberately not considered;
/// a single detour keeps the search linear in the pad count, which has to
/// fit in a 120 Hz tick alongside everything else.
///
/// Ties go to the direct route.
pub fn fastest_path(
    pads: &[BoostPad],
    car: &CarState,
    target_loc: Point2<f32>,
    approach: Option<Unit<Vector2<f32>>>,
) -> Route {
    let start = car.loc_2d();

    let mut direct = Drive1D::new().with_speed(car.vel.norm()).with_boost(car.boost);
    direct.advance_by_distance((target_loc - start).norm());

    let best_detour = pads
        .iter()
        .enumerate()
        .map(|(index, pad)| (index, pad, detour_time(pad, car, target_loc)))
        .min_by_key(|&(_, _, time)| NotNan::new(time).unwrap());

    if let Some((index, pad, time)) = best_detour {
        if time < direct.time() - TIME_EPS {
            let mut waypoints = ArrayVec::new();
            waypoints.push(start);
            waypoints.push(pad.loc);
            waypoints.push(target_loc);
            return Route {
                waypoints,
                time,
                pickup: Some(index),
                approach,
            };
        }
    }

    let mut waypoints = ArrayVec::new();
    waypoints.push(start);
    waypoints.push(target_loc);
    Route {
        waypoints,
        time: direct.time(),
        pickup: None,
        approach,
    }
}

/// Time to reach the target via `pad`: drive to the pad, then on to the
/// target with whatever the tank holds after the pickup. A pad still
/// cooling down when the car arrives replenishes nothing.
fn detour_time(pad: &BoostPad, car: &CarState, target_loc: Point2<f32>) -> f32 {
    let mut leg1 = Drive1D::new().with_speed(car.vel.norm()).with_boost(car.boost);
    leg1.advance_by_distance((pad.loc - car.loc_2d()).norm());

    let boost = if pad.active_within(leg1.time()) {
        pad.kind.capacity()
    } else {
        leg1.boost()
    };

    let mut leg2 = Drive1D::new().with_speed(leg1.speed()).with_boost(boost);
    leg2.advance_by_distance((target_loc - pad.loc).norm());

    leg1.time() + leg2.time()
}

#[cfg(test)]
mod tests {
    use crate::{
        game::{BoostPad, CarState, PadKind},
        routing::fastest_path,
    };
    use nalgebra::{Point2, Point3, UnitQuaternion, Vector3};

    fn car(boost: f32) -> CarState {
        CarState {
            loc: Point3::new(0.0, 0.0, 17.01),
            rot: UnitQuaternion::identity(),
            vel: Vector3::new(0.0, 0.0, 0.0),
            ang_vel: Vector3::new(0.0, 0.0, 0.0),
            boost,
        }
    }

    fn pad(x: f32, y: f32, active: bool, time_until_active: f32) -> BoostPad {
        BoostPad {
            loc: Point2::new(x, y),
            kind: PadKind::Dollar,
            is_active: active,
            time_until_active,
        }
    }

    #[test]
    fn no_pads_goes_direct() {
        let target = Point2::new(3000.0, 0.0);
        let route = fastest_path(&[], &car(50.0), target, None);
        assert!(route.on_final_leg());
        assert_eq!(route.next_waypoint(), target);
        assert_eq!(route.waypoints().len(), 2);
        assert!(route.time() > 0.0);
    }

    #[test]
    fn empty_tank_detours_through_a_pad_on_the_way() {
        // Straight-line target is far and the tank is empty; a full boost
        // sitting roughly on the way more than pays for itself.
        let target = Point2::new(5000.0, 0.0);
        let pads = [pad(1000.0, 0.0, true, 0.0)];
        let route = fastest_path(&pads, &car(0.0), target, None);
        assert_eq!(route.pickup(), Some(0));
        assert_eq!(route.next_waypoint(), pads[0].loc);
        assert_eq!(route.waypoints().len(), 3);

        let direct = fastest_path(&[], &car(0.0), target, None);
        assert!(route.time() < direct.time());
    }

    #[test]
    fn detour_skipped_when_strictly_slower() {
        // A pad far off to the side is never worth it for a short hop.
        let target = Point2::new(1000.0, 0.0);
        let pads = [pad(0.0, 4000.0, true, 0.0)];
        let route = fastest_path(&pads, &car(100.0), target, None);
        assert!(route.on_final_leg());
        assert_eq!(route.next_waypoint(), target);
    }

    #[test]
    fn cooling_pad_replenishes_nothing() {
        // Same geometry as the profitable detour, but the pad won't be back
        // up for a long time, so the detour gains nothing and loses nothing
        // on distance — the tie goes to the direct route.
        let target = Point2::new(5000.0, 0.0);
        let pads = [pad(1000.0, 0.0, false, 60.0)];
        let route = fastest_path(&pads, &car(0.0), target, None);
        assert!(route.on_final_leg());
    }

    #[test]
    fn prefers_available_pad_over_cooling_pad() {
        let target = Point2::new(6000.0, 0.0);
        let pads = [
            pad(2000.0, 0.0, false, 60.0),
            pad(1000.0, 0.0, true, 0.0),
        ];
        let route = fastest_path(&pads, &car(0.0), target, None);
        assert_eq!(route.pickup(), Some(1));
    }

    #[test]
    fn pad_respawning_in_time_counts() {
        // The pad is down now but respawns well before the car gets there.
        let target = Point2::new(5000.0, 0.0);
        let pads = [pad(1000.0, 0.0, false, 0.5)];
        let route = fastest_path(&pads, &car(0.0), target, None);
        assert_eq!(route.pickup(), Some(0));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let target = Point2::new(4000.0, 1000.0);
        let pads = [pad(1500.0, 500.0, true, 0.0), pad(3000.0, -500.0, true, 0.0)];
        let a = fastest_path(&pads, &car(20.0), target, None);
        let b = fastest_path(&pads, &car(20.0), target, None);
        assert_eq!(a.waypoints(), b.waypoints());
        assert_eq!(a.time(), b.time());
        assert_eq!(a.pickup(), b.pickup());
    }
}
