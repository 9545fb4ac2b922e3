//! Fleet aggregation: reports derived from a collection of ships.
//!
//! Every function here takes the fleet as anything that iterates over
//! `&Spaceship` (a slice, a `Vec`, a `HashSet`, map values, ...), reads it
//! once, and returns a fresh value. Nothing in the fleet is modified, and no
//! report depends on the order the fleet iterates in.
//!
//! ```
//! use starfleet_logic::crew::Crew;
//! use starfleet_logic::fleet;
//! use starfleet_logic::ship::Spaceship;
//!
//! let fleet = vec![
//!     Spaceship::transport_ship("Colonial One", 1980, 1.0, Crew::new(), 100, 200),
//!     Spaceship::fighter("Viper 1104", 2003, 2.0, Crew::new(), vec![]),
//! ];
//! assert_eq!(fleet::total_maintenance_cost(&fleet), 4100 + 4500);
//! assert_eq!(fleet::instance_count_by_type(&fleet)["Fighter"], 1);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::crew::{Officer, Rank};
use crate::error::FleetError;
use crate::ordering::{by_fire_power_and_commission_year, by_rank_popularity, RankCount};
use crate::ship::{ShipClass, Spaceship};

/// Ship summaries, strongest first (see [`by_fire_power_and_commission_year`]).
pub fn ship_descriptions_sorted<'a>(fleet: impl IntoIterator<Item = &'a Spaceship>) -> Vec<String> {
    let mut ships: Vec<&Spaceship> = fleet.into_iter().collect();
    ships.sort_by(|a, b| by_fire_power_and_commission_year(a, b));
    ships.iter().map(|ship| ship.to_string()).collect()
}

/// Number of ships per class, keyed by class name.
pub fn instance_count_by_type<'a>(
    fleet: impl IntoIterator<Item = &'a Spaceship>,
) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for ship in fleet {
        *counts.entry(ship.class().name()).or_insert(0) += 1;
    }
    counts
}

/// Sum of every ship's current annual maintenance cost.
pub fn total_maintenance_cost<'a>(fleet: impl IntoIterator<Item = &'a Spaceship>) -> i64 {
    fleet.into_iter().map(Spaceship::annual_maintenance_cost).sum()
}

/// Names of every weapon installed anywhere in the fleet.
pub fn fleet_weapon_names<'a>(fleet: impl IntoIterator<Item = &'a Spaceship>) -> BTreeSet<String> {
    fleet
        .into_iter()
        .filter_map(Spaceship::weapons)
        .flatten()
        .map(|weapon| weapon.name().to_string())
        .collect()
}

/// Crew aboard all ships. A person listed on two ships counts twice.
pub fn total_crew_members<'a>(fleet: impl IntoIterator<Item = &'a Spaceship>) -> usize {
    fleet.into_iter().map(|ship| ship.crew().len()).sum()
}

/// Mean age of every officer in the fleet.
pub fn average_officer_age<'a>(
    fleet: impl IntoIterator<Item = &'a Spaceship>,
) -> Result<f64, FleetError> {
    let (count, total_age) = fleet
        .into_iter()
        .flat_map(|ship| ship.crew().officers())
        .fold((0u64, 0u64), |(count, total), officer| {
            (count + 1, total + officer.age() as u64)
        });
    if count == 0 {
        return Err(FleetError::NoOfficers);
    }
    Ok(total_age as f64 / count as f64)
}

/// The most senior officer of each ship, mapped to that ship.
///
/// Ships without officers are left out. Rank ties aboard one ship go to the
/// officer added to the crew first. Two ships whose top officers share a name
/// collide on the same key; the ship visited last wins.
pub fn highest_ranking_officer_per_ship<'a>(
    fleet: impl IntoIterator<Item = &'a Spaceship>,
) -> HashMap<&'a Officer, &'a Spaceship> {
    let mut commanders = HashMap::new();
    for ship in fleet {
        if let Some(officer) = ship.crew().highest_ranking_officer() {
            if let Some(previous) = commanders.insert(officer, ship) {
                log::warn!(
                    "officer {} commands both {} and {}",
                    officer.name(),
                    previous.name(),
                    ship.name()
                );
            }
        }
    }
    commanders
}

/// Officer rank histogram, least common rank first.
pub fn officer_ranks_by_popularity<'a>(
    fleet: impl IntoIterator<Item = &'a Spaceship>,
) -> Vec<RankCount> {
    let mut histogram: BTreeMap<Rank, usize> = BTreeMap::new();
    for officer in fleet.into_iter().flat_map(|ship| ship.crew().officers()) {
        *histogram.entry(officer.rank()).or_insert(0) += 1;
    }
    let mut entries: Vec<RankCount> = histogram
        .into_iter()
        .map(|(rank, count)| RankCount { rank, count })
        .collect();
    entries.sort_by(by_rank_popularity);
    entries
}

/// Highest ranking officer aboard one ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandingOfficer {
    pub ship_class: ShipClass,
    pub ship: String,
    pub officer: String,
}

/// Every fleet report computed over one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    pub ship_count: usize,
    pub ship_descriptions: Vec<String>,
    pub instance_count_by_type: BTreeMap<&'static str, usize>,
    pub total_maintenance_cost: i64,
    pub weapon_names: BTreeSet<String>,
    pub total_crew_members: usize,
    /// `None` when the fleet has no officers.
    pub average_officer_age: Option<f64>,
    /// One entry per ship with officers aboard, ordered by class then ship
    /// name. Same-named ships of different classes each get their own entry.
    pub commanding_officers: Vec<CommandingOfficer>,
    pub officer_ranks_by_popularity: Vec<RankCount>,
}

impl FleetReport {
    pub fn compile<'a>(fleet: impl IntoIterator<Item = &'a Spaceship>) -> Self {
        let ships: Vec<&Spaceship> = fleet.into_iter().collect();
        log::debug!("compiling fleet report over {} ships", ships.len());

        let mut commanding_officers: Vec<CommandingOfficer> = ships
            .iter()
            .filter_map(|ship| {
                let officer = ship.crew().highest_ranking_officer()?;
                Some(CommandingOfficer {
                    ship_class: ship.class(),
                    ship: ship.name().to_string(),
                    officer: officer.name().to_string(),
                })
            })
            .collect();
        commanding_officers.sort_by(|a, b| {
            a.ship_class
                .cmp(&b.ship_class)
                .then_with(|| a.ship.cmp(&b.ship))
        });

        Self {
            ship_count: ships.len(),
            ship_descriptions: ship_descriptions_sorted(ships.iter().copied()),
            instance_count_by_type: instance_count_by_type(ships.iter().copied()),
            total_maintenance_cost: total_maintenance_cost(ships.iter().copied()),
            weapon_names: fleet_weapon_names(ships.iter().copied()),
            total_crew_members: total_crew_members(ships.iter().copied()),
            average_officer_age: average_officer_age(ships.iter().copied()).ok(),
            commanding_officers,
            officer_ranks_by_popularity: officer_ranks_by_popularity(ships.iter().copied()),
        }
    }
}
