//! Fleet selection: filter by capacity and date, rank by cost efficiency,
//! fall back to the nearest available dates.

pub mod domain;
mod fleet;

pub use domain::{
    AssignmentRequest, AssignmentResult, CostComparisonEntry, RankedTruck, Truck,
};
pub use fleet::FleetAssignmentOptimizer;
