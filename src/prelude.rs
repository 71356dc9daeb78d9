// Re-export key components
pub use crate::Error;
pub use crate::guidance::{RouteStability, RouteUpdate, TurnDirection, TurnInstruction, derive_turns};
pub use crate::loading::{
    GraphSnapshot, HazardRecord, RouteRequest, build_building_graph, read_graph_snapshot,
    read_hazard_records,
};
pub use crate::model::{
    BuildingGraph, EvacEdge, EvacNode, HazardField, HazardKind, HazardSnapshot, HazardZone,
    NodeKind,
};
pub use crate::routing::{CostModel, MobilityProfile, RouteResult, find_route, path_cost, path_safety};
pub use crate::sim::advance_hazards;

// Reference tuning constants
pub use crate::{
    BLOCKING_THRESHOLD, DAMPING_FACTOR, ELDERLY_PENALTY_FACTOR, HAZARD_WEIGHT, HYSTERESIS_FACTOR,
    PROXIMITY_RADIUS, TURN_ANGLE_THRESHOLD, UNITS_PER_METER, VERTICAL_TURN_THRESHOLD,
};
