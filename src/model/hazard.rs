//! Hazard zones and the versioned hazard state
//!
//! The live hazard set is owned by a single writer ([`HazardField`]) and
//! published to readers as an immutable, generation-stamped
//! [`HazardSnapshot`]. Route searches only ever see snapshots, so a search
//! in progress can never observe a propagation tick happening underneath it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Fire,
    Smoke,
    Blocked,
}

/// A region of elevated risk. Severity and the affected node set only ever
/// grow; hazards never resolve or shrink (conservative safety posture).
#[derive(Debug, Clone)]
pub struct HazardZone {
    pub id: String,
    pub kind: HazardKind,
    severity: f64,
    affected: HashSet<String>,
    pub propagation_rate: f64,
    pub created_at: DateTime<Utc>,
}

impl HazardZone {
    pub fn new(
        id: impl Into<String>,
        kind: HazardKind,
        severity: f64,
        affected: impl IntoIterator<Item = String>,
        propagation_rate: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity: severity.clamp(0.0, 1.0),
            affected: affected.into_iter().collect(),
            propagation_rate: propagation_rate.clamp(0.0, 1.0),
            created_at,
        }
    }

    pub fn severity(&self) -> f64 {
        self.severity
    }

    pub fn affects(&self, node_id: &str) -> bool {
        self.affected.contains(node_id)
    }

    pub fn affected(&self) -> impl Iterator<Item = &str> {
        self.affected.iter().map(String::as_str)
    }

    pub fn affected_count(&self) -> usize {
        self.affected.len()
    }

    /// One tick worth of severity growth, capped at 1.
    pub(crate) fn intensify(&mut self, damping: f64) {
        self.severity = (self.severity + self.propagation_rate * damping).min(1.0);
    }

    pub(crate) fn extend_affected(&mut self, ids: impl IntoIterator<Item = String>) {
        self.affected.extend(ids);
    }

    /// Monotone merge of a re-reported zone: severity and rate can only
    /// ratchet upward, the affected set only unions.
    pub(crate) fn absorb(&mut self, other: HazardZone) {
        self.severity = self.severity.max(other.severity);
        self.propagation_rate = self.propagation_rate.max(other.propagation_rate);
        self.affected.extend(other.affected);
    }
}

/// Writer-owned live hazard state.
///
/// Mutations (external reports via [`ingest`](Self::ingest), simulation
/// ticks via [`crate::sim::advance_hazards`]) bump the generation counter;
/// readers take frozen [`HazardSnapshot`]s.
#[derive(Debug, Default)]
pub struct HazardField {
    zones: Vec<HazardZone>,
    generation: u64,
}

impl HazardField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends externally sensed zones, merging re-reports by id.
    pub fn ingest(&mut self, incoming: Vec<HazardZone>) {
        for zone in incoming {
            match self.zones.iter_mut().find(|z| z.id == zone.id) {
                Some(existing) => existing.absorb(zone),
                None => {
                    debug!(
                        "new hazard {} ({:?}), severity {:.2}, {} affected nodes",
                        zone.id,
                        zone.kind,
                        zone.severity(),
                        zone.affected_count()
                    );
                    self.zones.push(zone);
                }
            }
        }
        self.generation += 1;
    }

    pub fn zones(&self) -> &[HazardZone] {
        &self.zones
    }

    pub(crate) fn zones_mut(&mut self) -> &mut [HazardZone] {
        &mut self.zones
    }

    pub(crate) fn bump(&mut self) {
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Publishes an immutable view of the current state.
    pub fn snapshot(&self) -> HazardSnapshot {
        HazardSnapshot {
            generation: self.generation,
            zones: Arc::from(self.zones.as_slice()),
        }
    }
}

/// Immutable, generation-stamped view of the hazard state.
#[derive(Debug, Clone)]
pub struct HazardSnapshot {
    generation: u64,
    zones: Arc<[HazardZone]>,
}

impl HazardSnapshot {
    /// Snapshot with no hazards, generation 0.
    pub fn empty() -> Self {
        Self {
            generation: 0,
            zones: Vec::new().into(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn zones(&self) -> &[HazardZone] {
        &self.zones
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Maximum severity among zones affecting the node, 0 if none.
    pub fn severity_at(&self, node_id: &str) -> f64 {
        self.zones
            .iter()
            .filter(|zone| zone.affects(node_id))
            .map(HazardZone::severity)
            .fold(0.0, f64::max)
    }
}
