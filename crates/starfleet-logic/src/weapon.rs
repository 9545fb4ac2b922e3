//! Weapon value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::default_loadout;

/// An installed weapon system. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    fire_power: i32,
    annual_maintenance_cost: i64,
}

impl Weapon {
    pub fn new(name: impl Into<String>, fire_power: i32, annual_maintenance_cost: i64) -> Self {
        Self {
            name: name.into(),
            fire_power,
            annual_maintenance_cost,
        }
    }

    /// The loadout a StealthCruiser receives when built without weapons.
    pub fn laser_cannons() -> Self {
        Self::new(
            default_loadout::NAME,
            default_loadout::FIRE_POWER,
            default_loadout::ANNUAL_MAINTENANCE_COST,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fire_power(&self) -> i32 {
        self.fire_power
    }

    pub fn annual_maintenance_cost(&self) -> i64 {
        self.annual_maintenance_cost
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weapon [name={}, firePower={}, annualMaintenanceCost={}]",
            self.name, self.fire_power, self.annual_maintenance_cost
        )
    }
}

/// Sum of fire power contributions, widened so no weapon list can overflow it.
pub fn total_fire_power(weapons: &[Weapon]) -> i64 {
    weapons.iter().map(|weapon| i64::from(weapon.fire_power())).sum()
}

/// Sum of annual maintenance cost contributions.
pub fn total_maintenance_cost(weapons: &[Weapon]) -> i64 {
    weapons.iter().map(Weapon::annual_maintenance_cost).sum()
}

/// Render a weapon list as `[a, b, c]`.
pub fn format_weapon_array(weapons: &[Weapon]) -> String {
    let items: Vec<String> = weapons.iter().map(Weapon::to_string).collect();
    format!("[{}]", items.join(", "))
}
