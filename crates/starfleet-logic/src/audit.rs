//! Fleet audit: consistency checks over a fleet snapshot.
//!
//! Nothing in the model rejects odd input at construction time. The audit
//! collects everything that makes a report ambiguous and returns it as a
//! list; callers decide what to do with the findings.
//!
//! Checks:
//! - two ships with the same class and name in one fleet
//! - one officer (by name) aboard several ships, which makes
//!   [`highest_ranking_officer_per_ship`](crate::fleet::highest_ranking_officer_per_ship)
//!   ambiguous
//! - ColonialVipers crewed by anyone but crew women, CylonRaiders crewed by
//!   anyone but Cylons
//! - blank ship or crew names

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::ship::{ShipClass, Spaceship};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FleetIssue {
    /// A second ship with the same class and name.
    DuplicateShip { class: ShipClass, name: String },
    /// An officer listed aboard more than one ship.
    OfficerOnMultipleShips { officer: String, ships: Vec<String> },
    /// A crew member whose kind doesn't match what the ship class carries.
    UnexpectedCrew {
        ship: String,
        member: String,
        kind: &'static str,
    },
    /// A ship with a blank name.
    EmptyShipName { class: ShipClass },
    /// A crew member with a blank name.
    EmptyCrewName { ship: String },
}

impl fmt::Display for FleetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateShip { class, name } => {
                write!(f, "duplicate {class} named {name:?}")
            }
            Self::OfficerOnMultipleShips { officer, ships } => {
                write!(f, "officer {officer:?} serves aboard {}", ships.join(", "))
            }
            Self::UnexpectedCrew { ship, member, kind } => {
                write!(f, "{ship:?} carries {kind} {member:?}")
            }
            Self::EmptyShipName { class } => write!(f, "{class} with a blank name"),
            Self::EmptyCrewName { ship } => {
                write!(f, "{ship:?} lists a crew member with a blank name")
            }
        }
    }
}

/// Crew kind a ship class is restricted to, if any.
fn required_crew_kind(class: ShipClass) -> Option<&'static str> {
    match class {
        ShipClass::ColonialViper => Some("CrewWoman"),
        ShipClass::CylonRaider => Some("Cylon"),
        _ => None,
    }
}

/// Run every check and return all findings, in fleet order.
pub fn audit_fleet<'a>(fleet: impl IntoIterator<Item = &'a Spaceship>) -> Vec<FleetIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<(ShipClass, &str)> = HashSet::new();
    let mut postings: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for ship in fleet {
        if ship.name().trim().is_empty() {
            issues.push(FleetIssue::EmptyShipName {
                class: ship.class(),
            });
        }
        if !seen.insert((ship.class(), ship.name())) {
            issues.push(FleetIssue::DuplicateShip {
                class: ship.class(),
                name: ship.name().to_string(),
            });
        }

        let required = required_crew_kind(ship.class());
        for member in ship.crew() {
            if member.name().trim().is_empty() {
                issues.push(FleetIssue::EmptyCrewName {
                    ship: ship.name().to_string(),
                });
            }
            if let Some(required) = required {
                if member.kind_name() != required {
                    issues.push(FleetIssue::UnexpectedCrew {
                        ship: ship.name().to_string(),
                        member: member.name().to_string(),
                        kind: member.kind_name(),
                    });
                }
            }
        }

        for officer in ship.crew().officers() {
            postings
                .entry(officer.name())
                .or_default()
                .push(ship.name().to_string());
        }
    }

    for (officer, ships) in postings {
        if ships.len() > 1 {
            issues.push(FleetIssue::OfficerOnMultipleShips {
                officer: officer.to_string(),
                ships,
            });
        }
    }

    for issue in &issues {
        log::warn!("fleet audit: {issue}");
    }
    issues
}
