//! Hazard propagation simulation

mod propagation;

pub use propagation::advance_hazards;
