pub mod arm;
pub mod epsilon_greedy;
pub mod errors;
pub mod greedy;
mod policy;
pub mod ucb;

pub use policy::{Policy, PolicyStats, PolicyType};
