//! Route results and re-pricing of an already-presented route

use itertools::Itertools;
use serde::Serialize;

use crate::guidance::TurnInstruction;
use crate::model::{BuildingGraph, EvacNode, HazardSnapshot};
use crate::routing::cost::CostModel;
use crate::Error;

/// A computed evacuation route. Only the last committed result is retained
/// by the caller (see [`crate::guidance::RouteStability`]); stale results
/// are discarded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Ordered node sequence from start to the chosen exit. Every adjacent
    /// pair corresponds to an edge in the snapshot.
    pub path: Vec<EvacNode>,
    pub total_cost: f64,
    /// Mean hazard severity sampled across the path's nodes,
    /// 0 = safe .. 1 = dangerous.
    pub safety_score: f64,
    pub turns: Vec<TurnInstruction>,
    pub exit_used: String,
    /// Hazard snapshot generation this result was computed against.
    pub hazard_generation: u64,
}

/// Re-prices an existing path under a fresh hazard snapshot.
///
/// Used to re-evaluate the currently presented route live: its displayed
/// cost reacts immediately to worsening hazards, while switching to a
/// different path is gated by the stability policy. `None` means some leg
/// has become impassable.
///
/// # Errors
///
/// [`Error::InvalidData`] if consecutive path nodes are not connected in
/// the snapshot.
pub fn path_cost(
    graph: &BuildingGraph,
    hazards: &HazardSnapshot,
    cost_model: &CostModel,
    path: &[EvacNode],
) -> Result<Option<f64>, Error> {
    let mut total = 0.0;
    for (from, to) in path.iter().tuple_windows() {
        let from_index = graph.index_of(&from.id)?;
        let to_index = graph.index_of(&to.id)?;
        let edge = graph.graph.find_edge(from_index, to_index).ok_or_else(|| {
            Error::InvalidData(format!("path nodes {} and {} are not connected", from.id, to.id))
        })?;
        let step = cost_model.edge_cost(
            &graph.graph[edge],
            hazards.severity_at(&from.id),
            hazards.severity_at(&to.id),
        );
        match step {
            Some(step) => total += step,
            None => return Ok(None),
        }
    }
    Ok(Some(total))
}

/// Mean severity over the path's nodes under a fresh hazard snapshot.
pub fn path_safety(hazards: &HazardSnapshot, path: &[EvacNode]) -> f64 {
    if path.is_empty() {
        return 0.0;
    }
    path.iter()
        .map(|node| hazards.severity_at(&node.id))
        .sum::<f64>()
        / path.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::{EdgeRecord, GraphSnapshot, NodeRecord, build_building_graph};
    use crate::model::{HazardField, HazardKind, HazardZone, NodeKind};
    use crate::routing::find_route;
    use chrono::Utc;

    fn corridor() -> BuildingGraph {
        build_building_graph(GraphSnapshot {
            nodes: vec![
                NodeRecord::new("a", 0.0, 0.0, 0.0, NodeKind::Room),
                NodeRecord::new("b", 10.0, 0.0, 0.0, NodeKind::Junction),
                NodeRecord::new("c", 20.0, 0.0, 0.0, NodeKind::Exit),
            ],
            edges: vec![
                EdgeRecord::new("ab", "a", "b", 10.0),
                EdgeRecord::new("bc", "b", "c", 10.0),
            ],
        })
        .unwrap()
    }

    fn hazard_on_b(severity: f64) -> HazardSnapshot {
        let mut field = HazardField::new();
        field.ingest(vec![HazardZone::new(
            "h1",
            HazardKind::Smoke,
            severity,
            ["b".to_owned()],
            0.1,
            Utc::now(),
        )]);
        field.snapshot()
    }

    #[test]
    fn reprice_matches_search_total() {
        let graph = corridor();
        let model = CostModel::default();
        let hazards = hazard_on_b(0.2);
        let route = find_route(&graph, &hazards, &model, "a", &["c".to_owned()])
            .unwrap()
            .unwrap();
        let repriced = path_cost(&graph, &hazards, &model, &route.path)
            .unwrap()
            .unwrap();
        assert!((repriced - route.total_cost).abs() < 1e-9);
    }

    #[test]
    fn reprice_reports_impassable_leg() {
        let graph = corridor();
        let model = CostModel::default();
        let route = find_route(
            &graph,
            &HazardSnapshot::empty(),
            &model,
            "a",
            &["c".to_owned()],
        )
        .unwrap()
        .unwrap();
        let repriced = path_cost(&graph, &hazard_on_b(0.95), &model, &route.path).unwrap();
        assert!(repriced.is_none());
    }

    #[test]
    fn safety_is_monotone_in_severity_for_a_fixed_path() {
        let graph = corridor();
        let route = find_route(
            &graph,
            &HazardSnapshot::empty(),
            &CostModel::default(),
            "a",
            &["c".to_owned()],
        )
        .unwrap()
        .unwrap();

        let mut last = 0.0;
        for severity in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let score = path_safety(&hazard_on_b(severity), &route.path);
            assert!(score >= last);
            last = score;
        }
    }
}
