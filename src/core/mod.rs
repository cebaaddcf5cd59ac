pub mod id;
pub mod log;
pub mod stats;
pub mod store;

pub use stats::DashboardStats;
pub use store::{Confirm, DeleteOutcome, PlanStore};
