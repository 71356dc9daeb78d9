//! Wire types for the engine's external interfaces, plus the graph builder
//!
//! Snapshots arrive as camelCase JSON from the sensing/integration layer;
//! this module deserializes them and builds the immutable
//! [`BuildingGraph`](crate::model::BuildingGraph).

mod builder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{HazardKind, HazardZone, NodeKind};

pub use builder::{build_building_graph, read_graph_snapshot, read_hazard_records};

/// Full topology snapshot, built once per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub label: Option<String>,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, x: f64, y: f64, z: f64, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            z,
            kind,
            label: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    pub length: f64,
    pub base_cost: f64,
    #[serde(default)]
    pub is_stairs: bool,
    /// False means the edge is not wheelchair-safe.
    #[serde(default = "default_accessible")]
    pub accessibility_flag: bool,
}

fn default_accessible() -> bool {
    true
}

impl EdgeRecord {
    /// Plain corridor edge: base cost equals length, no stairs, accessible.
    pub fn new(
        id: impl Into<String>,
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        length: f64,
    ) -> Self {
        Self {
            id: id.into(),
            from_id: from_id.into(),
            to_id: to_id.into(),
            length,
            base_cost: length,
            is_stairs: false,
            accessibility_flag: true,
        }
    }

    pub fn stairs(mut self) -> Self {
        self.is_stairs = true;
        self.accessibility_flag = false;
        self
    }
}

/// One externally sensed hazard zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HazardKind,
    pub severity: f64,
    pub affected_node_ids: Vec<String>,
    pub propagation_rate: f64,
    pub created_at: DateTime<Utc>,
}

impl From<HazardRecord> for HazardZone {
    fn from(record: HazardRecord) -> Self {
        HazardZone::new(
            record.id,
            record.kind,
            record.severity,
            record.affected_node_ids,
            record.propagation_rate,
            record.created_at,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub start_node_id: String,
    pub goal_node_ids: Vec<String>,
}
