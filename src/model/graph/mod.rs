//! Building graph model - nodes, edges, and adjacency queries

pub mod components;
pub mod network;

pub use components::{EvacEdge, EvacNode, NodeKind};
pub use network::BuildingGraph;
