//! Advances hazard severity and spread on an externally-triggered tick
//!
//! The tick cadence belongs to the caller; the engine owns no clock. The
//! transition is deliberately monotone: severities only grow toward 1 and
//! affected sets only gain nodes, modeling a conservative "assume worst"
//! posture. The caller supplies the RNG so tests can seed one.

use hashbrown::HashSet;
use log::{debug, warn};
use rand::Rng;

use crate::model::{BuildingGraph, HazardField, HazardSnapshot};
use crate::{DAMPING_FACTOR, PROXIMITY_RADIUS};

/// One simulation tick over every hazard zone.
///
/// Per zone: severity gains `propagation_rate * DAMPING_FACTOR` (capped at
/// 1), then every node within [`PROXIMITY_RADIUS`] of an already-affected
/// node joins the affected set with independent probability equal to the
/// zone's propagation rate.
///
/// Requires exclusive access to the field (single-writer); returns the
/// freshly published snapshot.
pub fn advance_hazards<R: Rng>(
    field: &mut HazardField,
    graph: &BuildingGraph,
    rng: &mut R,
) -> HazardSnapshot {
    for zone in field.zones_mut() {
        zone.intensify(DAMPING_FACTOR);

        let rate = zone.propagation_rate;
        let anchors: Vec<_> = zone
            .affected()
            .filter_map(|id| match graph.index_of(id) {
                Ok(index) => Some(index),
                Err(_) => {
                    warn!("hazard {} affects unknown node {id}", zone.id);
                    None
                }
            })
            .collect();

        let mut gained: HashSet<String> = HashSet::new();
        for &anchor in &anchors {
            for other in graph.node_indices() {
                if other == anchor {
                    continue;
                }
                let other_id = graph.node_at(other).id.as_str();
                if zone.affects(other_id) || gained.contains(other_id) {
                    continue;
                }
                if graph.node_distance(anchor, other) <= PROXIMITY_RADIUS
                    && rng.random_bool(rate)
                {
                    gained.insert(other_id.to_owned());
                }
            }
        }

        if !gained.is_empty() {
            debug!(
                "hazard {} spread to {} new nodes, severity {:.2}",
                zone.id,
                gained.len(),
                zone.severity()
            );
            zone.extend_affected(gained);
        }
    }

    field.bump();
    field.snapshot()
}
