//! Multi-goal evacuation route search
//!
//! One A* per candidate exit with the straight-line distance to that exit
//! as heuristic, fanned out across goals with rayon and joined at the end.
//! The globally cheapest reached exit wins, which is not necessarily the
//! geometrically nearest one.

use std::collections::BinaryHeap;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::debug;
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rayon::prelude::*;

use super::state::State;
use crate::Error;
use crate::guidance::derive_turns;
use crate::model::{BuildingGraph, EvacNode, HazardSnapshot};
use crate::routing::cost::CostModel;
use crate::routing::route::RouteResult;

/// Finds the cheapest route from `start_id` to the best reachable goal.
///
/// `Ok(None)` means every goal is unreachable under the current hazard
/// state - a normal operating condition during an active hazard, which the
/// caller must branch on ("stay in place, escalate"), not an error.
///
/// # Errors
///
/// [`Error::NodeNotFound`] if the start or any goal id is absent from the
/// snapshot; [`Error::InvalidData`] on an empty goal set.
pub fn find_route(
    graph: &BuildingGraph,
    hazards: &HazardSnapshot,
    cost_model: &CostModel,
    start_id: &str,
    goal_ids: &[String],
) -> Result<Option<RouteResult>, Error> {
    if goal_ids.is_empty() {
        return Err(Error::InvalidData("empty goal set".to_owned()));
    }
    let start = graph.index_of(start_id)?;
    let goals = goal_ids
        .iter()
        .map(|id| graph.index_of(id))
        .collect::<Result<Vec<_>, _>>()?;

    // One severity sample per node, shared by every per-goal search so the
    // whole computation sees a single frozen hazard state.
    let severities: Vec<f64> = graph
        .node_indices()
        .map(|index| hazards.severity_at(&graph.node_at(index).id))
        .collect();

    let reached: Vec<(NodeIndex, Vec<NodeIndex>, f64)> = goals
        .par_iter()
        .filter_map(|&goal| {
            astar_to_goal(graph, &severities, cost_model, start, goal)
                .map(|(path, cost)| (goal, path, cost))
        })
        .collect();

    debug!(
        "route search from {start_id}: {} of {} goals reachable (hazard generation {})",
        reached.len(),
        goals.len(),
        hazards.generation()
    );

    let best = reached.into_iter().min_by(|a, b| {
        a.2.total_cmp(&b.2)
            .then_with(|| graph.node_at(a.0).id.cmp(&graph.node_at(b.0).id))
    });
    let Some((goal, path, total_cost)) = best else {
        return Ok(None);
    };

    let safety_score =
        path.iter().map(|&index| severities[index.index()]).sum::<f64>() / path.len() as f64;
    let nodes: Vec<EvacNode> = path
        .into_iter()
        .map(|index| graph.node_at(index).clone())
        .collect();
    let turns = derive_turns(&nodes);

    Ok(Some(RouteResult {
        path: nodes,
        total_cost,
        safety_score,
        turns,
        exit_used: graph.node_at(goal).id.clone(),
        hazard_generation: hazards.generation(),
    }))
}

/// A* toward a single goal. Returns the node path and its total cost, or
/// `None` once the frontier is exhausted without reaching the goal.
fn astar_to_goal(
    graph: &BuildingGraph,
    severities: &[f64],
    cost_model: &CostModel,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<(Vec<NodeIndex>, f64)> {
    let estimated_nodes = graph.node_count().min(1000);
    let mut g_scores: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut open = BinaryHeap::with_capacity(estimated_nodes / 4);

    g_scores.insert(start, 0.0);
    open.push(State {
        f: OrderedFloat(graph.node_distance(start, goal)),
        g: 0.0,
        node: start,
    });

    while let Some(State { g, node, .. }) = open.pop() {
        if node == goal {
            return Some((reconstruct_path(&predecessors, start, goal), g));
        }

        // Skip if we've found a better path
        if g_scores.get(&node).is_some_and(|&best| g > best) {
            continue;
        }

        for edge in graph.graph.edges(node) {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let Some(step) = cost_model.edge_cost(
                edge.weight(),
                severities[node.index()],
                severities[next.index()],
            ) else {
                continue;
            };
            let tentative = g + step;

            let improved = match g_scores.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(tentative);
                    true
                }
                Entry::Occupied(mut entry) => {
                    if tentative < *entry.get() {
                        *entry.get_mut() = tentative;
                        true
                    } else {
                        false
                    }
                }
            };
            if improved {
                predecessors.insert(next, node);
                open.push(State {
                    f: OrderedFloat(tentative + graph.node_distance(next, goal)),
                    g: tentative,
                    node: next,
                });
            }
        }
    }

    None
}

fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
