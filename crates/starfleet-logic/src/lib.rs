//! Pure fleet logic for Starfleet.
//!
//! This crate models ships, crews and weapons, and derives fleet-wide
//! reports from them. Functions take plain data and return plain values, so
//! everything here is unit-testable with no runtime, I/O or global state.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`audit`] | Fleet consistency checks (duplicates, crew kinds, blank names) |
//! | [`constants`] | Base costs, formula coefficients, default loadouts |
//! | [`crew`] | Officers, crew women, Cylons, ranks, insertion-ordered rosters |
//! | [`error`] | Aggregation errors |
//! | [`fleet`] | Fleet aggregations and the bundled [`fleet::FleetReport`] |
//! | [`ordering`] | Ship ordering and rank popularity ordering |
//! | [`ship`] | Ship classes, maintenance cost formulas, stealth registry |
//! | [`weapon`] | Weapon value object |

pub mod audit;
pub mod constants;
pub mod crew;
pub mod error;
pub mod fleet;
pub mod ordering;
pub mod ship;
pub mod weapon;
