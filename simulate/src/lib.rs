#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::drive1d::{max_distance, max_distance_batch, Drive1D};

mod drive1d;
