//! Data model for evacuation routing
//!
//! Contains the static building graph and the time-varying hazard state.

pub mod graph;
pub mod hazard;

pub use graph::network::BuildingGraph;
pub use graph::{EvacEdge, EvacNode, NodeKind};
pub use hazard::{HazardField, HazardKind, HazardSnapshot, HazardZone};
