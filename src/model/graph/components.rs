//! Building graph components - nodes and traversable edges

use geo::Point;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Role of a node within the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Junction,
    Room,
    Exit,
    Stairs,
    Doorway,
}

/// A point in the building graph. Immutable after construction.
#[derive(Debug, Clone)]
pub struct EvacNode {
    pub id: String,
    /// Planar coordinates in model units.
    pub geometry: Point<f64>,
    /// Vertical coordinate in model units. The engine treats the whole
    /// graph as one connectivity space; `z` only feeds distances and
    /// up/down turn instructions.
    pub z: f64,
    pub kind: NodeKind,
    pub label: Option<String>,
}

impl EvacNode {
    pub fn x(&self) -> f64 {
        self.geometry.x()
    }

    pub fn y(&self) -> f64 {
        self.geometry.y()
    }

    /// 3-D Euclidean distance to another node, in model units.
    pub fn distance_to(&self, other: &EvacNode) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

// Flat {id, x, y, z, type, label} on the wire, matching the snapshot input
// shape rather than nesting the geometry.
impl Serialize for EvacNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EvacNode", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("x", &self.x())?;
        state.serialize_field("y", &self.y())?;
        state.serialize_field("z", &self.z)?;
        state.serialize_field("type", &self.kind)?;
        state.serialize_field("label", &self.label)?;
        state.end()
    }
}

/// A traversable connection between two nodes. Endpoints live in the graph
/// structure; the edge weight carries the physical attributes.
#[derive(Debug, Clone)]
pub struct EvacEdge {
    pub id: String,
    /// Geometric length in model units.
    pub length: f64,
    /// Traversal cost before hazard and mobility adjustments, normally
    /// equal to `length`.
    pub base_cost: f64,
    pub is_stairs: bool,
    /// False means the edge is not wheelchair-safe.
    pub accessible: bool,
}
