use common::{physics, prelude::*, rl};
use nalgebra::{Point2, Point3, Unit, UnitQuaternion, Vector2, Vector3};

/// Immutable snapshot of one car's kinematic state for the current tick.
/// Everything downstream treats this as read-only input.
#[derive(Clone)]
pub struct CarState {
    pub loc: Point3<f32>,
    pub rot: UnitQuaternion<f32>,
    pub vel: Vector3<f32>,
    pub ang_vel: Vector3<f32>,
    pub boost: f32,
}

impl CarState {
    pub fn forward_axis(&self) -> Unit<Vector3<f32>> {
        physics::car_forward_axis(self.rot)
    }

    pub fn forward_axis_2d(&self) -> Unit<Vector2<f32>> {
        Unit::new_normalize(self.forward_axis().to_2d())
    }

    pub fn loc_2d(&self) -> Point2<f32> {
        self.loc.to_2d()
    }

    pub fn vel_2d(&self) -> Vector2<f32> {
        self.vel.to_2d()
    }

    /// The car's yaw. Only meaningful while on flat ground.
    pub fn yaw(&self) -> f32 {
        self.rot.euler_angles().2
    }
}

/// The two sizes of boost pickup on the field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PadKind {
    /// A full boost (a "dollar" in this codebase's parlance).
    Dollar,
    /// A small boost pellet (a "penny").
    Penny,
}

impl PadKind {
    pub fn capacity(self) -> f32 {
        match self {
            PadKind::Dollar => rl::BOOST_DOLLAR_CAPACITY,
            PadKind::Penny => rl::BOOST_PENNY_CAPACITY,
        }
    }

    pub fn respawn_delay(self) -> f32 {
        match self {
            PadKind::Dollar => rl::BOOST_DOLLAR_RESPAWN,
            PadKind::Penny => rl::BOOST_PENNY_RESPAWN,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            PadKind::Dollar => rl::BOOST_DOLLAR_RADIUS,
            PadKind::Penny => rl::BOOST_PENNY_RADIUS,
        }
    }
}

/// One pickup's live state, as reported by the game for the current tick.
/// The planner reads these and never mutates them.
#[derive(Copy, Clone, Debug)]
pub struct BoostPad {
    pub loc: Point2<f32>,
    pub kind: PadKind,
    pub is_active: bool,
    /// Seconds until the pad respawns. Zero while the pad is up.
    pub time_until_active: f32,
}

impl BoostPad {
    /// Whether the pad will be up for a car arriving `time` seconds from
    /// now.
    pub fn active_within(&self, time: f32) -> bool {
        self.is_active || self.time_until_active <= time
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{BoostPad, CarState, PadKind};
    use nalgebra::{Point2, Point3, UnitQuaternion, Vector3};
    use std::f32::consts::PI;

    #[test]
    fn yaw_from_rotation() {
        let car = CarState {
            loc: Point3::new(0.0, 0.0, 17.01),
            rot: UnitQuaternion::from_euler_angles(0.0, 0.0, PI / 2.0),
            vel: Vector3::new(0.0, 0.0, 0.0),
            ang_vel: Vector3::new(0.0, 0.0, 0.0),
            boost: 100.0,
        };
        assert!((car.yaw() - PI / 2.0).abs() < 1e-5);
        let fw = car.forward_axis_2d();
        assert!(fw.x.abs() < 1e-5 && (fw.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn pad_availability() {
        let pad = BoostPad {
            loc: Point2::new(0.0, 0.0),
            kind: PadKind::Dollar,
            is_active: false,
            time_until_active: 3.0,
        };
        assert!(!pad.active_within(2.0));
        assert!(pad.active_within(3.0));
        assert_eq!(pad.kind.capacity(), 100.0);
        assert_eq!(PadKind::Penny.capacity(), 12.0);
    }
}
