//! Errors raised by fleet aggregations.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FleetError {
    /// An officer statistic was requested over a fleet with no officers aboard.
    #[error("no officers serve aboard any ship in the fleet")]
    NoOfficers,
}
