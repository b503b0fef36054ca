//! Closed-form longitudinal drive model.
//!
//! Between a standstill and [`rl::CAR_NORMAL_SPEED`] the throttle
//! acceleration is affine in velocity (`A * v + b`), which integrates to
//! exponential curves. Braking and boosting above the throttle ceiling are
//! constant accelerations, which integrate to plain quadratics. Stitching
//! the pieces together gives the car's speed and distance after any amount
//! of time without stepping frame by frame.

use common::rl;

/// Slope of the throttle acceleration curve below `CAR_NORMAL_SPEED`.
const A: f32 = -(rl::THROTTLE_ACCEL - rl::THROTTLE_ACCEL_MID) / rl::CAR_NORMAL_SPEED;

/// The car's longitudinal state at one instant of a simulation.
#[derive(Copy, Clone, Debug)]
struct State {
    vel: f32,
    boost: f32,
    /// Time budget left to simulate.
    time: f32,
    /// Distance accumulated so far.
    dist: f32,
}

/// The four speed ranges, in the order a forward-accelerating car passes
/// through them. Speed can never skip backwards to a lower range, so a
/// single pass over [`Regime::ALL`] covers any starting state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Regime {
    /// Rolling backwards. Only the brake applies; boost is inert.
    Brake,
    /// Below `CAR_NORMAL_SPEED` with boost held and fuel in the tank.
    LowSpeedBoost,
    /// Below `CAR_NORMAL_SPEED` on throttle alone.
    LowSpeed,
    /// Between `CAR_NORMAL_SPEED` and `CAR_MAX_SPEED`, where only boost
    /// still accelerates the car.
    HighSpeed,
}

impl Regime {
    const ALL: [Regime; 4] = [
        Regime::Brake,
        Regime::LowSpeedBoost,
        Regime::LowSpeed,
        Regime::HighSpeed,
    ];

    /// The speed at which the car leaves this regime.
    fn ceiling(self) -> f32 {
        match self {
            Regime::Brake => 0.0,
            Regime::LowSpeedBoost | Regime::LowSpeed => rl::CAR_NORMAL_SPEED,
            Regime::HighSpeed => rl::CAR_MAX_SPEED,
        }
    }

    fn uses_boost(self) -> bool {
        match self {
            Regime::LowSpeedBoost | Regime::HighSpeed => true,
            Regime::Brake | Regime::LowSpeed => false,
        }
    }

    /// `b` of the affine acceleration law, or the constant acceleration of
    /// the quadratic regimes.
    fn accel(self) -> f32 {
        match self {
            Regime::Brake => rl::BRAKE_ACCEL,
            Regime::LowSpeedBoost => rl::THROTTLE_ACCEL + rl::BOOST_ACCEL,
            Regime::LowSpeed => rl::THROTTLE_ACCEL,
            Regime::HighSpeed => rl::BOOST_ACCEL,
        }
    }

    fn is_affine(self) -> bool {
        match self {
            Regime::LowSpeedBoost | Regime::LowSpeed => true,
            Regime::Brake | Regime::HighSpeed => false,
        }
    }

    /// Distance covered `t` seconds after entering this regime at `v0`.
    fn distance(self, t: f32, v0: f32) -> f32 {
        let b = self.accel();
        if self.is_affine() {
            (b * ((A * t).exp_m1() - A * t) + A * v0 * (A * t).exp_m1()) / (A * A)
        } else {
            t * (b * t + 2.0 * v0) / 2.0
        }
    }

    /// Velocity reached `t` seconds after entering this regime at `v0`.
    fn velocity(self, t: f32, v0: f32) -> f32 {
        let b = self.accel();
        if self.is_affine() {
            b * (A * t).exp_m1() / A + v0 * (A * t).exp()
        } else {
            b * t + v0
        }
    }

    /// Time needed to accelerate from `v0` to `v` within this regime.
    fn time_to_velocity(self, v: f32, v0: f32) -> f32 {
        let b = self.accel();
        if self.is_affine() {
            ((A * v + b) / (A * v0 + b)).ln() / A
        } else {
            (v - v0) / b
        }
    }

    /// Advance the state to this regime's soonest exit: the time budget,
    /// the speed ceiling, or (when boosting) an empty tank, whichever comes
    /// first.
    fn step(self, state: State) -> State {
        if self.ceiling() <= state.vel || state.time == 0.0 {
            return state;
        }

        let t_vel = self.time_to_velocity(self.ceiling(), state.vel);
        let t_boost = if self.uses_boost() {
            state.boost / rl::BOOST_DEPLETION
        } else {
            std::f32::INFINITY
        };

        if state.time <= t_vel && state.time <= t_boost {
            // The time budget runs out inside this regime.
            let boost_used = if self.uses_boost() {
                state.time * rl::BOOST_DEPLETION
            } else {
                0.0
            };
            return State {
                vel: self.velocity(state.time, state.vel),
                boost: (state.boost - boost_used).max(0.0),
                time: 0.0,
                dist: state.dist + self.distance(state.time, state.vel),
            };
        }

        let (t, vel, boost) = if t_boost < t_vel {
            // The tank runs dry below the ceiling; the throttle-only regime
            // takes over from here within the same call.
            (t_boost, self.velocity(t_boost, state.vel), 0.0)
        } else {
            let boost_used = if self.uses_boost() {
                t_vel * rl::BOOST_DEPLETION
            } else {
                0.0
            };
            (t_vel, self.ceiling(), state.boost - boost_used)
        };

        State {
            vel,
            boost,
            time: state.time - t,
            dist: state.dist + self.distance(t, state.vel),
        }
    }
}

/// Analytic counterpart of stepping a car forward frame by frame: jumps
/// straight to the state after `dt` seconds of full throttle, boosting
/// while the tank lasts. Backwards starting speeds brake to a stop first;
/// boost is assumed not to be used while still rolling backwards.
#[derive(Clone, Debug)]
pub struct Drive1D {
    time: f32,
    dist: f32,
    vel: f32,
    boost: f32,
}

impl Drive1D {
    pub fn new() -> Self {
        Self {
            time: 0.0,
            dist: 0.0,
            vel: 0.0,
            boost: 100.0,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.vel = speed.max(-rl::CAR_MAX_SPEED).min(rl::CAR_MAX_SPEED);
        self
    }

    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost.max(0.0);
        self
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn distance(&self) -> f32 {
        self.dist
    }

    pub fn speed(&self) -> f32 {
        self.vel
    }

    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Advance the simulation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !(dt > 0.0) {
            return;
        }

        let mut state = State {
            vel: self.vel,
            boost: self.boost,
            time: dt,
            dist: 0.0,
        };
        for &regime in Regime::ALL.iter() {
            state = regime.step(state);
        }

        // Past the last ceiling the car no longer accelerates; whatever
        // time is left is spent at terminal speed.
        self.time += dt;
        self.dist += state.dist + state.time * state.vel;
        self.vel = state.vel;
        self.boost = state.boost;
    }

    /// Advance until `distance` more has been covered. Distance is monotone
    /// in time for a nonnegative starting speed, so this bisects over
    /// [`advance`](Drive1D::advance).
    pub fn advance_by_distance(&mut self, distance: f32) {
        if !(distance > 0.0) || !distance.is_finite() {
            return;
        }

        let mut hi = (distance / rl::CAR_MAX_SPEED).max(rl::PHYSICS_DT);
        while self.gained(hi) < distance {
            hi *= 2.0;
        }
        let mut lo = 0.0;
        for _ in 0..50 {
            let mid = (lo + hi) / 2.0;
            if self.gained(mid) < distance {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        self.advance(hi);
    }

    /// Distance that advancing by `dt` would add.
    fn gained(&self, dt: f32) -> f32 {
        let mut copy = self.clone();
        copy.advance(dt);
        copy.dist - self.dist
    }
}

impl Default for Drive1D {
    fn default() -> Self {
        Self::new()
    }
}

/// The max distance the car can drive forward in the given time, boosting
/// while the tank lasts. Any starting speed in `±CAR_MAX_SPEED` is allowed.
pub fn max_distance(time: f32, speed: f32, boost: f32) -> f32 {
    let mut car = Drive1D::new().with_speed(speed).with_boost(boost);
    car.advance(time);
    car.distance()
}

/// Batched [`max_distance`] over independent inputs. Purely a convenience;
/// each output equals the corresponding scalar call exactly.
pub fn max_distance_batch(times: &[f32], speeds: &[f32], boosts: &[f32]) -> Vec<f32> {
    assert_eq!(times.len(), speeds.len());
    assert_eq!(times.len(), boosts.len());
    times
        .iter()
        .zip(speeds)
        .zip(boosts)
        .map(|((&time, &speed), &boost)| max_distance(time, speed, boost))
        .collect()
}
