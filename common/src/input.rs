/// One tick's worth of controller output. Only mechanics build these — the
/// drive model and the planner deal strictly in distances, times, and
/// waypoints.
#[derive(Debug, Default, Copy, Clone)]
pub struct CarInput {
    pub throttle: f32,
    pub steer: f32,
    pub boost: bool,
    pub jump: bool,
    pub handbrake: bool,
}
