//! Test helpers shared across Jarvis crates.

pub mod random;
pub mod scheduler;
pub mod sink;

pub use random::{ConstRandom, SeededRandom};
pub use scheduler::ManualScheduler;
pub use sink::CollectingSink;
