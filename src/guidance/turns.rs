//! Turn derivation from path geometry
//!
//! Instructions are emitted only where the path actually turns; straight
//! segments are suppressed to keep instruction noise down, so there is one
//! instruction per detected turn, never one per node, and never an
//! instruction at the first or last node.

use std::f64::consts::{PI, TAU};

use itertools::Itertools;
use serde::Serialize;

use crate::model::EvacNode;
use crate::{TURN_ANGLE_THRESHOLD, UNITS_PER_METER, VERTICAL_TURN_THRESHOLD};

/// Straight is deliberately absent; a straight segment emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TurnDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnInstruction {
    /// Node where the turn occurs.
    pub at_node_id: String,
    pub direction: TurnDirection,
    /// Distance to the next waypoint in meters, one decimal.
    pub distance_to_next: f64,
}

/// Derives turn instructions for each interior node of a path.
///
/// The incoming and outgoing headings are compared as angles; a normalized
/// heading change beyond [`TURN_ANGLE_THRESHOLD`] becomes a left/right
/// turn. On a planar heading that is effectively straight, a vertical
/// displacement beyond [`VERTICAL_TURN_THRESHOLD`] becomes up/down.
pub fn derive_turns(path: &[EvacNode]) -> Vec<TurnInstruction> {
    let mut instructions = Vec::new();

    for (previous, here, next) in path.iter().tuple_windows() {
        let inbound = heading(previous, here);
        let outbound = heading(here, next);
        let delta = normalize_angle(outbound - inbound);

        let direction = if delta > TURN_ANGLE_THRESHOLD {
            Some(TurnDirection::Right)
        } else if delta < -TURN_ANGLE_THRESHOLD {
            Some(TurnDirection::Left)
        } else {
            let vertical = next.z - here.z;
            if vertical.abs() > VERTICAL_TURN_THRESHOLD {
                Some(if vertical > 0.0 {
                    TurnDirection::Up
                } else {
                    TurnDirection::Down
                })
            } else {
                None
            }
        };

        if let Some(direction) = direction {
            instructions.push(TurnInstruction {
                at_node_id: here.id.clone(),
                direction,
                distance_to_next: to_meters(here.distance_to(next)),
            });
        }
    }

    instructions
}

fn heading(from: &EvacNode, to: &EvacNode) -> f64 {
    (to.y() - from.y()).atan2(to.x() - from.x())
}

/// Wraps an angle into (-pi, pi].
fn normalize_angle(mut radians: f64) -> f64 {
    while radians > PI {
        radians -= TAU;
    }
    while radians <= -PI {
        radians += TAU;
    }
    radians
}

fn to_meters(model_units: f64) -> f64 {
    (model_units / UNITS_PER_METER * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use geo::Point;

    fn node(id: &str, x: f64, y: f64, z: f64) -> EvacNode {
        EvacNode {
            id: id.to_owned(),
            geometry: Point::new(x, y),
            z,
            kind: NodeKind::Junction,
            label: None,
        }
    }

    #[test]
    fn ninety_degree_corner_emits_one_turn() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 10.0, 10.0, 0.0),
        ];
        let turns = derive_turns(&path);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].at_node_id, "b");
        assert_eq!(turns[0].direction, TurnDirection::Right);
        assert_eq!(turns[0].distance_to_next, 1.0);
    }

    #[test]
    fn opposite_corner_turns_the_other_way() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 10.0, -10.0, 0.0),
        ];
        let turns = derive_turns(&path);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].direction, TurnDirection::Left);
    }

    #[test]
    fn straight_segments_emit_nothing() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 20.0, 1.0, 0.0),
            node("d", 30.0, 2.0, 0.0),
        ];
        assert!(derive_turns(&path).is_empty());
    }

    #[test]
    fn vertical_displacement_emits_up_or_down() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 20.0, 0.0, 35.0),
            node("d", 30.0, 0.0, 35.0),
        ];
        let turns = derive_turns(&path);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].at_node_id, "b");
        assert_eq!(turns[0].direction, TurnDirection::Up);

        let descending = [
            node("a", 0.0, 0.0, 35.0),
            node("b", 10.0, 0.0, 35.0),
            node("c", 20.0, 0.0, 0.0),
        ];
        assert_eq!(derive_turns(&descending)[0].direction, TurnDirection::Down);
    }

    #[test]
    fn small_vertical_changes_are_ignored() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 20.0, 0.0, 15.0),
        ];
        assert!(derive_turns(&path).is_empty());
    }

    #[test]
    fn endpoints_never_get_instructions() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 10.0, 10.0, 0.0),
            node("d", 0.0, 10.0, 0.0),
        ];
        for turn in derive_turns(&path) {
            assert_ne!(turn.at_node_id, "a");
            assert_ne!(turn.at_node_id, "d");
        }
    }

    #[test]
    fn wraparound_heading_change_is_normalized() {
        // East, then just south of west: raw delta is close to +pi after
        // normalization, not -pi.
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 0.0, 1.0, 0.0),
        ];
        let turns = derive_turns(&path);
        assert_eq!(turns.len(), 1);
    }

    #[test]
    fn distances_are_rounded_to_one_decimal() {
        let path = [
            node("a", 0.0, 0.0, 0.0),
            node("b", 10.0, 0.0, 0.0),
            node("c", 10.0, 12.34, 0.0),
        ];
        let turns = derive_turns(&path);
        assert_eq!(turns[0].distance_to_next, 1.2);
    }

    #[test]
    fn two_node_paths_have_no_interior() {
        let path = [node("a", 0.0, 0.0, 0.0), node("b", 10.0, 0.0, 0.0)];
        assert!(derive_turns(&path).is_empty());
    }
}
