pub use crate::routing::pathing::{fastest_path, Route};

mod pathing;
