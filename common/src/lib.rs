#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::input::CarInput;

pub mod ext;
mod input;
pub mod physics;
pub mod prelude;
pub mod rl;
