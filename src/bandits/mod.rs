mod bandit;
mod bernoulli;
pub mod errors;
mod normal;
mod periodic;

pub use bandit::{Bandit, BanditType};
pub use bernoulli::BernoulliBandit;
pub use normal::{IncrementingNormalBandit, NormalBandit};
pub use periodic::PeriodicNormalBandit;
