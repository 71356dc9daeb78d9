//! Route commitment with hysteresis
//!
//! Hazard estimates are noisy, and re-routing a traveler mid-evacuation has
//! a real cost. A freshly computed candidate therefore only replaces the
//! committed route when it is materially cheaper; the first candidate is
//! always committed. The asymmetry is deliberate: the committed route's
//! live re-evaluated cost (see [`crate::routing::path_cost`]) may worsen at
//! any time, but switching paths requires clearing the hysteresis bar.

use log::info;

use crate::HYSTERESIS_FACTOR;
use crate::routing::RouteResult;

const HAZARD_CHANGE_ADVISORY: &str = "route updated due to hazard change";

/// Outcome of offering a candidate route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteUpdate {
    /// The candidate is now the committed route. The advisory is present
    /// when an already-presented route was replaced.
    Committed { advisory: Option<String> },
    /// The committed route stands.
    Kept,
}

/// Holds the last committed route and decides whether candidates replace it.
#[derive(Debug)]
pub struct RouteStability {
    hysteresis_factor: f64,
    committed: Option<RouteResult>,
}

impl RouteStability {
    pub fn new() -> Self {
        Self {
            hysteresis_factor: HYSTERESIS_FACTOR,
            committed: None,
        }
    }

    pub fn with_factor(hysteresis_factor: f64) -> Self {
        Self {
            hysteresis_factor,
            committed: None,
        }
    }

    /// The last committed route, if any. On a no-route recompute the caller
    /// keeps presenting this and escalates.
    pub fn current(&self) -> Option<&RouteResult> {
        self.committed.as_ref()
    }

    /// Commits the candidate if there is no committed route yet, or if the
    /// candidate is cheaper than `committed_cost * hysteresis_factor`.
    pub fn offer(&mut self, candidate: RouteResult) -> RouteUpdate {
        match &self.committed {
            None => {
                self.committed = Some(candidate);
                RouteUpdate::Committed { advisory: None }
            }
            Some(previous) if candidate.total_cost < previous.total_cost * self.hysteresis_factor => {
                info!(
                    "switching route: {:.1} -> {:.1} via {}",
                    previous.total_cost, candidate.total_cost, candidate.exit_used
                );
                self.committed = Some(candidate);
                RouteUpdate::Committed {
                    advisory: Some(HAZARD_CHANGE_ADVISORY.to_owned()),
                }
            }
            Some(_) => RouteUpdate::Kept,
        }
    }

    /// Live re-evaluation of the committed route under fresh hazards: the
    /// presented cost and safety react immediately, without hysteresis.
    pub fn reprice_committed(&mut self, total_cost: f64, safety_score: f64) {
        if let Some(committed) = &mut self.committed {
            committed.total_cost = total_cost;
            committed.safety_score = safety_score;
        }
    }
}

impl Default for RouteStability {
    fn default() -> Self {
        Self::new()
    }
}
