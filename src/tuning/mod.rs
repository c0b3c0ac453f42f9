//! Post-generation shaping: choosing among candidate mazes by dead-end count,
//! and braiding dead ends into loops.

mod bias;
mod braid;

pub use bias::{attempt_count, select_by_dead_end_bias};
pub use braid::braid;
