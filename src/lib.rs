//! Evacuation routing engine for building connectivity graphs
//!
//! The crate computes and re-computes a safe evacuation route through a
//! building graph whose nodes can fall inside hazard zones (fire, smoke,
//! blockage) of varying severity. It is a pure computation core: sensing,
//! presentation and alerting are the caller's concern. The caller hands the
//! engine an immutable graph, a frozen hazard snapshot and a mobility
//! profile, and gets back a route with turn-by-turn guidance, or `None`
//! when no exit is reachable.

pub mod error;
pub mod guidance;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;
pub mod sim;

pub use error::Error;

/// Fraction of a hazard's propagation rate converted into severity gain
/// per simulation tick.
pub const DAMPING_FACTOR: f64 = 0.5;

/// Distance (model units) within which a hazard can jump to a new node
/// during one propagation tick.
pub const PROXIMITY_RADIUS: f64 = 120.0;

/// Endpoint severity above which an edge is impassable.
pub const BLOCKING_THRESHOLD: f64 = 0.7;

/// Multiplier applied to `length * severity` when pricing a hazardous edge.
pub const HAZARD_WEIGHT: f64 = 20.0;

/// Extra cost per unit length for travelers with the `elderly` flag.
pub const ELDERLY_PENALTY_FACTOR: f64 = 0.3;

/// A candidate route must be cheaper than `committed * HYSTERESIS_FACTOR`
/// to replace the committed one.
pub const HYSTERESIS_FACTOR: f64 = 0.88;

/// Model units per meter, used when reporting distances to the traveler.
pub const UNITS_PER_METER: f64 = 10.0;

/// Heading change (radians) below which a segment counts as straight.
pub const TURN_ANGLE_THRESHOLD: f64 = 0.3;

/// Vertical displacement (model units) that turns a straight segment into
/// an up/down instruction.
pub const VERTICAL_TURN_THRESHOLD: f64 = 20.0;
