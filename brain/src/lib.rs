#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    game::{BoostPad, CarState, PadKind},
    mechanics::{simple_steer_towards, Drive, NavigateBoost, SimpleDrive},
    predict::{ground_intercept, intercept, Intercept, TrajectorySample},
    routing::{fastest_path, Route},
};

mod game;
mod mechanics;
mod predict;
mod routing;
mod utils;
