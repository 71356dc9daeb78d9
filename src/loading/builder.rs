use std::io::Read;

use geo::Point;
use hashbrown::HashMap;
use log::info;
use petgraph::graph::UnGraph;

use super::{GraphSnapshot, HazardRecord};
use crate::model::{BuildingGraph, EvacEdge, EvacNode};
use crate::Error;

/// Builds the immutable building graph from a topology snapshot.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] on duplicate node ids, non-finite
/// coordinates, dangling edge endpoints or negative lengths.
pub fn build_building_graph(snapshot: GraphSnapshot) -> Result<BuildingGraph, Error> {
    let mut graph = UnGraph::with_capacity(snapshot.nodes.len(), snapshot.edges.len());
    let mut indices = HashMap::with_capacity(snapshot.nodes.len());

    for record in snapshot.nodes {
        if !(record.x.is_finite() && record.y.is_finite() && record.z.is_finite()) {
            return Err(Error::InvalidData(format!(
                "node {} has non-finite coordinates",
                record.id
            )));
        }
        if indices.contains_key(&record.id) {
            return Err(Error::InvalidData(format!(
                "duplicate node id: {}",
                record.id
            )));
        }
        let node = EvacNode {
            id: record.id.clone(),
            geometry: Point::new(record.x, record.y),
            z: record.z,
            kind: record.kind,
            label: record.label,
        };
        let index = graph.add_node(node);
        indices.insert(record.id, index);
    }

    for record in snapshot.edges {
        let from = *indices.get(&record.from_id).ok_or_else(|| {
            Error::InvalidData(format!(
                "edge {} references unknown node {}",
                record.id, record.from_id
            ))
        })?;
        let to = *indices.get(&record.to_id).ok_or_else(|| {
            Error::InvalidData(format!(
                "edge {} references unknown node {}",
                record.id, record.to_id
            ))
        })?;
        if !record.length.is_finite() || record.length < 0.0 {
            return Err(Error::InvalidData(format!(
                "edge {} has invalid length {}",
                record.id, record.length
            )));
        }
        // A negative base cost would let the search improve forever across
        // an undirected edge.
        if !record.base_cost.is_finite() || record.base_cost < 0.0 {
            return Err(Error::InvalidData(format!(
                "edge {} has invalid base cost {}",
                record.id, record.base_cost
            )));
        }
        graph.add_edge(
            from,
            to,
            EvacEdge {
                id: record.id,
                length: record.length,
                base_cost: record.base_cost,
                is_stairs: record.is_stairs,
                accessible: record.accessibility_flag,
            },
        );
    }

    let graph = BuildingGraph::new(graph, indices);
    info!(
        "building graph constructed: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Reads a JSON topology snapshot.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] on malformed JSON.
pub fn read_graph_snapshot(reader: impl Read) -> Result<GraphSnapshot, Error> {
    serde_json::from_reader(reader).map_err(|e| Error::InvalidData(e.to_string()))
}

/// Reads a JSON hazard snapshot.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] on malformed JSON.
pub fn read_hazard_records(reader: impl Read) -> Result<Vec<HazardRecord>, Error> {
    serde_json::from_reader(reader).map_err(|e| Error::InvalidData(e.to_string()))
}
