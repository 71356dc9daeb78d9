//! Turn-by-turn guidance and route commitment policy

pub mod stability;
pub mod turns;

pub use stability::{RouteStability, RouteUpdate};
pub use turns::{TurnDirection, TurnInstruction, derive_turns};
