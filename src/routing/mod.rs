//! Route search - edge pricing, per-goal A*, and result assembly

pub mod astar;
pub mod cost;
pub mod route;

pub use astar::find_route;
pub use cost::{CostModel, MobilityProfile};
pub use route::{RouteResult, path_cost, path_safety};
