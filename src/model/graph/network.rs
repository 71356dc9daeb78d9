//! Building graph structure and lookup queries

use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

use super::components::{EvacEdge, EvacNode};
use crate::Error;

/// Undirected building graph with an id intern table.
///
/// Built once per session by [`crate::loading::build_building_graph`] and
/// read-only afterwards; the time-varying hazard state lives outside the
/// graph (see [`crate::model::HazardField`]).
#[derive(Debug, Clone)]
pub struct BuildingGraph {
    pub graph: UnGraph<EvacNode, EvacEdge>,
    indices: HashMap<String, NodeIndex>,
}

impl BuildingGraph {
    pub(crate) fn new(graph: UnGraph<EvacNode, EvacEdge>, indices: HashMap<String, NodeIndex>) -> Self {
        Self { graph, indices }
    }

    /// Resolves a public node id to its graph index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the id is absent from the snapshot.
    pub fn index_of(&self, id: &str) -> Result<NodeIndex, Error> {
        self.indices
            .get(id)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(id.to_owned()))
    }

    /// Looks up a node by its public id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the id is absent from the snapshot.
    pub fn node(&self, id: &str) -> Result<&EvacNode, Error> {
        Ok(&self.graph[self.index_of(id)?])
    }

    pub fn node_at(&self, index: NodeIndex) -> &EvacNode {
        &self.graph[index]
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Opposite endpoint of an edge, or `None` when the node is not an
    /// endpoint of that edge.
    pub fn other_endpoint(&self, edge: EdgeIndex, node: NodeIndex) -> Option<NodeIndex> {
        let (a, b) = self.graph.edge_endpoints(edge)?;
        if a == node {
            Some(b)
        } else if b == node {
            Some(a)
        } else {
            None
        }
    }

    /// 3-D Euclidean distance between two nodes, in model units.
    pub fn node_distance(&self, a: NodeIndex, b: NodeIndex) -> f64 {
        self.graph[a].distance_to(&self.graph[b])
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use crate::loading::{EdgeRecord, GraphSnapshot, NodeRecord, build_building_graph};
    use crate::model::NodeKind;

    fn corridor() -> GraphSnapshot {
        GraphSnapshot {
            nodes: vec![
                NodeRecord::new("a", 0.0, 0.0, 0.0, NodeKind::Room),
                NodeRecord::new("b", 30.0, 40.0, 0.0, NodeKind::Junction),
                NodeRecord::new("c", 30.0, 40.0, 120.0, NodeKind::Exit),
            ],
            edges: vec![
                EdgeRecord::new("ab", "a", "b", 50.0),
                EdgeRecord::new("bc", "b", "c", 120.0),
            ],
        }
    }

    #[test]
    fn lookup_by_id() {
        let graph = build_building_graph(corridor()).unwrap();
        assert_eq!(graph.node("b").unwrap().kind, NodeKind::Junction);
        assert!(graph.node("missing").is_err());
    }

    #[test]
    fn distance_includes_vertical_axis() {
        let graph = build_building_graph(corridor()).unwrap();
        let a = graph.index_of("a").unwrap();
        let b = graph.index_of("b").unwrap();
        let c = graph.index_of("c").unwrap();
        assert!((graph.node_distance(a, b) - 50.0).abs() < 1e-9);
        assert!((graph.node_distance(b, c) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn other_endpoint_is_symmetric() {
        let graph = build_building_graph(corridor()).unwrap();
        let a = graph.index_of("a").unwrap();
        let b = graph.index_of("b").unwrap();
        let edge = graph.graph.find_edge(a, b).unwrap();
        assert_eq!(graph.other_endpoint(edge, a), Some(b));
        assert_eq!(graph.other_endpoint(edge, b), Some(a));
        let c = graph.index_of("c").unwrap();
        assert_eq!(graph.other_endpoint(edge, c), None);
    }
}
