//! Edge traversal pricing
//!
//! Pure function of the edge, the severities at its endpoints and the
//! traveler's mobility profile. `None` means impassable; every priced edge
//! costs at least its base cost, which keeps the straight-line A* heuristic
//! admissible.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::EvacEdge;
use crate::{BLOCKING_THRESHOLD, ELDERLY_PENALTY_FACTOR, HAZARD_WEIGHT};

/// Traveler constraints that bias or forbid edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobilityProfile {
    pub wheelchair_user: bool,
    pub elderly: bool,
    /// Reserved; not yet consulted by the cost rule.
    pub injured: bool,
}

impl MobilityProfile {
    pub fn wheelchair() -> Self {
        Self {
            wheelchair_user: true,
            ..Self::default()
        }
    }

    pub fn elderly() -> Self {
        Self {
            elderly: true,
            ..Self::default()
        }
    }
}

/// Pricing context for one search: mobility profile plus optional external
/// congestion estimates keyed by edge id (absent = 0).
#[derive(Debug, Clone, Default)]
pub struct CostModel {
    pub profile: MobilityProfile,
    congestion: HashMap<String, f64>,
}

impl CostModel {
    pub fn new(profile: MobilityProfile) -> Self {
        Self {
            profile,
            congestion: HashMap::new(),
        }
    }

    pub fn set_congestion(&mut self, edge_id: impl Into<String>, estimate: f64) {
        self.congestion.insert(edge_id.into(), estimate.max(0.0));
    }

    /// Traversal cost for an edge, or `None` when it is impassable.
    ///
    /// Rules, in order: an endpoint severity above [`BLOCKING_THRESHOLD`]
    /// blocks the edge outright; stairs and edges flagged not
    /// wheelchair-safe block wheelchair users; otherwise the cost is base
    /// cost plus hazard, congestion and elderly surcharges.
    pub fn edge_cost(&self, edge: &EvacEdge, severity_a: f64, severity_b: f64) -> Option<f64> {
        let severity = severity_a.max(severity_b);
        if severity > BLOCKING_THRESHOLD {
            return None;
        }
        if self.profile.wheelchair_user && (edge.is_stairs || !edge.accessible) {
            return None;
        }

        let mut cost = edge.base_cost + edge.length * HAZARD_WEIGHT * severity;
        cost += self.congestion.get(&edge.id).copied().unwrap_or(0.0);
        if self.profile.elderly {
            cost += edge.length * ELDERLY_PENALTY_FACTOR;
        }
        Some(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor(length: f64) -> EvacEdge {
        EvacEdge {
            id: "e".to_owned(),
            length,
            base_cost: length,
            is_stairs: false,
            accessible: true,
        }
    }

    #[test]
    fn severity_above_threshold_blocks() {
        let model = CostModel::default();
        let edge = corridor(10.0);
        assert!(model.edge_cost(&edge, 0.71, 0.0).is_none());
        assert!(model.edge_cost(&edge, 0.0, 0.9).is_none());
        // "Exceeds" is strict: exactly at the threshold stays passable.
        assert!(model.edge_cost(&edge, 0.7, 0.0).is_some());
    }

    #[test]
    fn stairs_block_wheelchair_users_only() {
        let mut edge = corridor(10.0);
        edge.is_stairs = true;
        assert!(CostModel::new(MobilityProfile::wheelchair())
            .edge_cost(&edge, 0.0, 0.0)
            .is_none());
        assert_eq!(
            CostModel::default().edge_cost(&edge, 0.0, 0.0),
            Some(10.0)
        );
    }

    #[test]
    fn inaccessible_edges_block_wheelchair_users() {
        let mut edge = corridor(10.0);
        edge.accessible = false;
        assert!(CostModel::new(MobilityProfile::wheelchair())
            .edge_cost(&edge, 0.0, 0.0)
            .is_none());
        assert!(CostModel::default().edge_cost(&edge, 0.0, 0.0).is_some());
    }

    #[test]
    fn hazard_and_elderly_surcharges() {
        let edge = corridor(10.0);
        let cost = CostModel::default().edge_cost(&edge, 0.5, 0.2).unwrap();
        assert!((cost - (10.0 + 10.0 * 20.0 * 0.5)).abs() < 1e-9);

        let cost = CostModel::new(MobilityProfile::elderly())
            .edge_cost(&edge, 0.0, 0.0)
            .unwrap();
        assert!((cost - (10.0 + 10.0 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn congestion_is_added_when_known() {
        let edge = corridor(10.0);
        let mut model = CostModel::default();
        model.set_congestion("e", 4.5);
        model.set_congestion("other", 99.0);
        assert_eq!(model.edge_cost(&edge, 0.0, 0.0), Some(14.5));
    }

    #[test]
    fn priced_cost_never_undercuts_base_cost() {
        let edge = corridor(10.0);
        let model = CostModel::new(MobilityProfile::elderly());
        for severity in [0.0, 0.1, 0.3, 0.7] {
            let cost = model.edge_cost(&edge, severity, 0.0).unwrap();
            assert!(cost >= edge.base_cost);
        }
    }
}
