pub use crate::utils::tick::TickBudget;

mod tick;
