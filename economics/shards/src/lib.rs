pub mod calculator;
pub mod types;

pub use calculator::{compute, decentralization_factor};
pub use types::*;
