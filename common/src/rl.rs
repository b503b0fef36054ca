//! Various physical constants of the game's cars and field.

/// The distance from the field center to the side wall.
pub const FIELD_MAX_X: f32 = 4096.0;

/// The distance from the field center to the back wall.
pub const FIELD_MAX_Y: f32 = 5120.0;

/// The radius of the ball.
pub const BALL_RADIUS: f32 = 91.24;

/// The z location of a car sitting on the ground.
pub const CAR_NEUTRAL_Z: f32 = 17.01;

/// The constant frequency of the game's physics engine.
pub const PHYSICS_TICK_FREQ: f32 = 120.0;

/// The number of seconds between physics ticks.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_TICK_FREQ;

/// Throttle acceleration at a standstill. Between zero and
/// [`CAR_NORMAL_SPEED`] the acceleration falls off linearly with velocity,
/// ending at [`THROTTLE_ACCEL_MID`].
pub const THROTTLE_ACCEL: f32 = 1600.0;

/// Throttle acceleration just below [`CAR_NORMAL_SPEED`].
pub const THROTTLE_ACCEL_MID: f32 = 160.0;

/// The max speed a car can reach using only the throttle.
pub const CAR_NORMAL_SPEED: f32 = 1400.0;

/// The additional acceleration while boosting.
pub const BOOST_ACCEL: f32 = 991.6667;

/// Deceleration while braking.
pub const BRAKE_ACCEL: f32 = 3500.0;

/// The max speed a car can reach by boosting.
pub const CAR_MAX_SPEED: f32 = 2300.0;

/// Almost max speed. This is a placeholder for places where some sort of
/// boost hysteresis would have been appropriate.
pub const CAR_ALMOST_MAX_SPEED: f32 = CAR_MAX_SPEED - 10.0;

/// Boost depletion per second while the boost button is held.
pub const BOOST_DEPLETION: f32 = 33.3;

/// Boost granted by a full boost pickup.
pub const BOOST_DOLLAR_CAPACITY: f32 = 100.0;

/// Boost granted by a small boost pellet.
pub const BOOST_PENNY_CAPACITY: f32 = 12.0;

/// Seconds until a full boost pickup respawns after being taken.
pub const BOOST_DOLLAR_RESPAWN: f32 = 10.0;

/// Seconds until a small boost pellet respawns after being taken.
pub const BOOST_PENNY_RESPAWN: f32 = 4.0;

/// The radius of the full boost pickup's cylindrical hitbox.
pub const BOOST_DOLLAR_RADIUS: f32 = 208.0;

/// The radius of the small boost pickup's cylindrical hitbox.
pub const BOOST_PENNY_RADIUS: f32 = 144.0;
