pub use crate::predict::intercept::{ground_intercept, intercept, Intercept, TrajectorySample};

mod intercept;
