//! Spaceship entity model: ship classes, derived fire power and maintenance cost.
//!
//! A [`Spaceship`] holds the fields every class shares plus a [`ShipKind`]
//! carrying the class-specific data. Fire power and annual maintenance cost
//! are computed once, when the ship is built, from the crew and weapons it
//! was given. Ships own their crew and weapons and expose no mutators, so
//! the derived values can't drift from their inputs.
//!
//! The one exception is the StealthCruiser: its reported cost includes a
//! surcharge per StealthCruiser registered in a shared [`StealthRegistry`],
//! read at query time. Building a fourth cruiser raises the cost reported
//! by the first three.
//!
//! ```
//! use starfleet_logic::crew::Crew;
//! use starfleet_logic::ship::Spaceship;
//! use starfleet_logic::weapon::Weapon;
//!
//! let viper = Spaceship::fighter(
//!     "Viper 7242",
//!     2003,
//!     2.5,
//!     Crew::new(),
//!     vec![Weapon::new("Kinetic Energy Weapon", 15, 100)],
//! );
//! assert_eq!(viper.fire_power(), 25);
//! assert_eq!(viper.annual_maintenance_cost(), 5100);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{base_costs, coefficients, BASE_FIRE_POWER};
use crate::crew::Crew;
use crate::weapon::{self, Weapon};

// ── Ship classes ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShipClass {
    TransportShip = 0,
    Fighter = 1,
    StealthCruiser = 2,
    Bomber = 3,
    ColonialViper = 4,
    CylonRaider = 5,
}

impl ShipClass {
    pub fn all() -> &'static [ShipClass] {
        &[
            Self::TransportShip,
            Self::Fighter,
            Self::StealthCruiser,
            Self::Bomber,
            Self::ColonialViper,
            Self::CylonRaider,
        ]
    }

    /// Type name used in summaries and instance counts.
    pub fn name(self) -> &'static str {
        match self {
            Self::TransportShip => "TransportShip",
            Self::Fighter => "Fighter",
            Self::StealthCruiser => "StealthCruiser",
            Self::Bomber => "Bomber",
            Self::ColonialViper => "ColonialViper",
            Self::CylonRaider => "CylonRaider",
        }
    }

    pub fn base_annual_cost(self) -> i64 {
        match self {
            Self::TransportShip => base_costs::TRANSPORT_SHIP,
            Self::Fighter => base_costs::FIGHTER,
            Self::StealthCruiser => base_costs::STEALTH_CRUISER,
            Self::Bomber => base_costs::BOMBER,
            Self::ColonialViper => base_costs::COLONIAL_VIPER,
            Self::CylonRaider => base_costs::CYLON_RAIDER,
        }
    }

    /// Whether ships of this class carry weapons.
    pub fn is_armed(self) -> bool {
        !matches!(self, Self::TransportShip)
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Stealth registry ────────────────────────────────────────────────────

/// Shared count of StealthCruisers built against this registry.
///
/// Every StealthCruiser holds a handle to the registry it was built with and
/// reads the count whenever its cost is queried. The count only grows.
#[derive(Debug, Default)]
pub struct StealthRegistry {
    live: AtomicU32,
}

impl StealthRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of StealthCruisers built so far.
    pub fn live_count(&self) -> u32 {
        self.live.load(Ordering::SeqCst)
    }

    fn register(&self) -> u32 {
        self.live.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// ── Class-specific data ─────────────────────────────────────────────────

#[derive(Debug)]
pub enum ShipKind {
    TransportShip {
        cargo_capacity: u32,
        passenger_capacity: u32,
    },
    Fighter {
        weapons: Vec<Weapon>,
    },
    StealthCruiser {
        weapons: Vec<Weapon>,
        registry: Arc<StealthRegistry>,
    },
    Bomber {
        weapons: Vec<Weapon>,
        technicians: u32,
    },
    ColonialViper {
        weapons: Vec<Weapon>,
    },
    CylonRaider {
        weapons: Vec<Weapon>,
    },
}

impl ShipKind {
    pub fn class(&self) -> ShipClass {
        match self {
            Self::TransportShip { .. } => ShipClass::TransportShip,
            Self::Fighter { .. } => ShipClass::Fighter,
            Self::StealthCruiser { .. } => ShipClass::StealthCruiser,
            Self::Bomber { .. } => ShipClass::Bomber,
            Self::ColonialViper { .. } => ShipClass::ColonialViper,
            Self::CylonRaider { .. } => ShipClass::CylonRaider,
        }
    }

    /// Installed weapons, `None` for unarmed classes.
    pub fn weapons(&self) -> Option<&[Weapon]> {
        match self {
            Self::TransportShip { .. } => None,
            Self::Fighter { weapons }
            | Self::StealthCruiser { weapons, .. }
            | Self::Bomber { weapons, .. }
            | Self::ColonialViper { weapons }
            | Self::CylonRaider { weapons } => Some(weapons.as_slice()),
        }
    }
}

// ── Cost formulas ───────────────────────────────────────────────────────

/// `rate · speed`, snapped to the nearest whole number when it lies within
/// the speed's own f32 precision of one. A speed of 2.3 is stored as
/// 2.29999995, and 1000 · 2.3 must still floor to 2300.
fn speed_term(rate: f64, speed: f32) -> f64 {
    let product = rate * f64::from(speed);
    let nearest = product.round();
    if (product - nearest).abs() <= product.abs() * f64::from(f32::EPSILON) {
        nearest
    } else {
        product
    }
}

/// Fighter and StealthCruiser: `floor(base + W + 1000·S)`.
fn fighter_cost(base: i64, weapons_cost: i64, speed: f32) -> i64 {
    let fixed = base + weapons_cost;
    (fixed as f64 + speed_term(coefficients::FIGHTER_SPEED, speed)).floor() as i64
}

/// Bomber: `round(base + W·T/10)`, halves rounded up.
fn bomber_cost(base: i64, weapons_cost: i64, technicians: u32) -> i64 {
    let technician_share =
        weapons_cost as f64 * technicians as f64 / coefficients::BOMBER_TECHNICIAN_DIVISOR;
    (base as f64 + technician_share + 0.5).floor() as i64
}

/// Crewed combat classes: `floor(base + W + crew_rate·C + speed_rate·S)`.
fn crewed_cost(
    base: i64,
    weapons_cost: i64,
    crew_size: usize,
    crew_rate: i64,
    speed: f32,
    speed_rate: f64,
) -> i64 {
    let fixed = base + weapons_cost + crew_rate * crew_size as i64;
    (fixed as f64 + speed_term(speed_rate, speed)).floor() as i64
}

/// Cost frozen at construction. For a StealthCruiser this excludes the
/// registry surcharge.
fn construction_cost(kind: &ShipKind, crew_size: usize, speed: f32) -> i64 {
    let base = kind.class().base_annual_cost();
    match kind {
        ShipKind::TransportShip {
            cargo_capacity,
            passenger_capacity,
        } => {
            base + coefficients::CARGO * *cargo_capacity as i64
                + coefficients::PASSENGER * *passenger_capacity as i64
        }
        ShipKind::Fighter { weapons } | ShipKind::StealthCruiser { weapons, .. } => {
            fighter_cost(base, weapon::total_maintenance_cost(weapons), speed)
        }
        ShipKind::Bomber {
            weapons,
            technicians,
        } => bomber_cost(base, weapon::total_maintenance_cost(weapons), *technicians),
        ShipKind::ColonialViper { weapons } => crewed_cost(
            base,
            weapon::total_maintenance_cost(weapons),
            crew_size,
            coefficients::VIPER_CREW,
            speed,
            coefficients::VIPER_SPEED,
        ),
        ShipKind::CylonRaider { weapons } => crewed_cost(
            base,
            weapon::total_maintenance_cost(weapons),
            crew_size,
            coefficients::RAIDER_CREW,
            speed,
            coefficients::RAIDER_SPEED,
        ),
    }
}

// ── Spaceship ───────────────────────────────────────────────────────────

/// A ship in the fleet. Equal iff same class and same name.
#[derive(Debug)]
pub struct Spaceship {
    name: String,
    commission_year: i32,
    maximal_speed: f32,
    crew: Crew,
    fire_power: i64,
    annual_maintenance_cost: i64,
    kind: ShipKind,
}

impl Spaceship {
    fn commission(
        name: String,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        kind: ShipKind,
    ) -> Self {
        let fire_power = BASE_FIRE_POWER + kind.weapons().map_or(0, weapon::total_fire_power);
        let annual_maintenance_cost = construction_cost(&kind, crew.len(), maximal_speed);
        Self {
            name,
            commission_year,
            maximal_speed,
            crew,
            fire_power,
            annual_maintenance_cost,
            kind,
        }
    }

    /// Unarmed cargo and passenger hauler.
    pub fn transport_ship(
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        cargo_capacity: u32,
        passenger_capacity: u32,
    ) -> Self {
        Self::commission(
            name.into(),
            commission_year,
            maximal_speed,
            crew,
            ShipKind::TransportShip {
                cargo_capacity,
                passenger_capacity,
            },
        )
    }

    pub fn fighter(
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        weapons: Vec<Weapon>,
    ) -> Self {
        Self::commission(
            name.into(),
            commission_year,
            maximal_speed,
            crew,
            ShipKind::Fighter { weapons },
        )
    }

    /// A fighter whose cost grows with every StealthCruiser in `registry`.
    /// Registers itself on construction.
    pub fn stealth_cruiser(
        registry: &Arc<StealthRegistry>,
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        weapons: Vec<Weapon>,
    ) -> Self {
        let name = name.into();
        let live = registry.register();
        log::debug!("StealthCruiser {name} registered, {live} in service");
        Self::commission(
            name,
            commission_year,
            maximal_speed,
            crew,
            ShipKind::StealthCruiser {
                weapons,
                registry: Arc::clone(registry),
            },
        )
    }

    /// StealthCruiser fitted with the default Laser Cannons loadout.
    pub fn stealth_cruiser_with_default_loadout(
        registry: &Arc<StealthRegistry>,
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
    ) -> Self {
        Self::stealth_cruiser(
            registry,
            name,
            commission_year,
            maximal_speed,
            crew,
            vec![Weapon::laser_cannons()],
        )
    }

    pub fn bomber(
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        weapons: Vec<Weapon>,
        technicians: u32,
    ) -> Self {
        Self::commission(
            name.into(),
            commission_year,
            maximal_speed,
            crew,
            ShipKind::Bomber {
                weapons,
                technicians,
            },
        )
    }

    pub fn colonial_viper(
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        weapons: Vec<Weapon>,
    ) -> Self {
        Self::commission(
            name.into(),
            commission_year,
            maximal_speed,
            crew,
            ShipKind::ColonialViper { weapons },
        )
    }

    pub fn cylon_raider(
        name: impl Into<String>,
        commission_year: i32,
        maximal_speed: f32,
        crew: Crew,
        weapons: Vec<Weapon>,
    ) -> Self {
        Self::commission(
            name.into(),
            commission_year,
            maximal_speed,
            crew,
            ShipKind::CylonRaider { weapons },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commission_year(&self) -> i32 {
        self.commission_year
    }

    pub fn maximal_speed(&self) -> f32 {
        self.maximal_speed
    }

    pub fn crew(&self) -> &Crew {
        &self.crew
    }

    pub fn fire_power(&self) -> i64 {
        self.fire_power
    }

    pub fn class(&self) -> ShipClass {
        self.kind.class()
    }

    pub fn kind(&self) -> &ShipKind {
        &self.kind
    }

    pub fn base_annual_cost(&self) -> i64 {
        self.class().base_annual_cost()
    }

    /// Current annual maintenance cost. Fixed at construction for every
    /// class except StealthCruiser, which adds the registry surcharge.
    pub fn annual_maintenance_cost(&self) -> i64 {
        match &self.kind {
            ShipKind::StealthCruiser { registry, .. } => {
                self.annual_maintenance_cost
                    + coefficients::STEALTH_SURCHARGE * registry.live_count() as i64
            }
            _ => self.annual_maintenance_cost,
        }
    }

    pub fn weapons(&self) -> Option<&[Weapon]> {
        self.kind.weapons()
    }

    pub fn number_of_technicians(&self) -> Option<u32> {
        match self.kind {
            ShipKind::Bomber { technicians, .. } => Some(technicians),
            _ => None,
        }
    }

    pub fn cargo_capacity(&self) -> Option<u32> {
        match self.kind {
            ShipKind::TransportShip { cargo_capacity, .. } => Some(cargo_capacity),
            _ => None,
        }
    }

    pub fn passenger_capacity(&self) -> Option<u32> {
        match self.kind {
            ShipKind::TransportShip {
                passenger_capacity, ..
            } => Some(passenger_capacity),
            _ => None,
        }
    }
}

impl PartialEq for Spaceship {
    fn eq(&self, other: &Self) -> bool {
        self.class() == other.class() && self.name == other.name
    }
}

impl Eq for Spaceship {}

impl Hash for Spaceship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class().hash(state);
        self.name.hash(state);
    }
}

/// Renders a float the way the summary format expects. Magnitudes in
/// `[1e-3, 1e7)` print as plain decimals with at least one fractional digit
/// (`1.0`, `2.3`); anything outside that range prints as `1.0E-4`.
fn format_speed(speed: f32) -> String {
    if speed.is_nan() {
        return "NaN".to_string();
    }
    if speed.is_infinite() {
        return if speed > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = speed.abs();
    if magnitude == 0.0 || (1.0e-3..1.0e7).contains(&magnitude) {
        let plain = speed.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let scientific = format!("{speed:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => scientific,
        }
    }
}

impl fmt::Display for Spaceship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())?;
        write!(f, "\n\tName={}", self.name)?;
        write!(f, "\n\tCommissionYear={}", self.commission_year)?;
        write!(f, "\n\tMaximalSpeed={}", format_speed(self.maximal_speed))?;
        write!(f, "\n\tFirePower={}", self.fire_power)?;
        write!(f, "\n\tCrewMembers={}", self.crew.len())?;
        write!(f, "\n\tAnnualMaintenanceCost={}", self.annual_maintenance_cost())?;
        if let Some(weapons) = self.weapons() {
            write!(f, "\n\tWeaponArray={}", weapon::format_weapon_array(weapons))?;
        }
        match &self.kind {
            ShipKind::Bomber { technicians, .. } => {
                write!(f, "\n\tNumberOfTechnicians={technicians}")?;
            }
            ShipKind::TransportShip {
                cargo_capacity,
                passenger_capacity,
            } => {
                write!(f, "\n\tCargoCapacity={cargo_capacity}")?;
                write!(f, "\n\tPassengerCapacity={passenger_capacity}")?;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::{CrewWoman, Cylon, Officer, Rank};

    fn crew_of(n: usize) -> Crew {
        (0..n)
            .map(|i| CrewWoman::new(format!("Crew {i}"), 25, 2))
            .collect()
    }

    #[test]
    fn test_transport_cost_and_fire_power() {
        let ship = Spaceship::transport_ship("Colonial One", 1990, 1.0, crew_of(3), 100, 50);
        assert_eq!(ship.fire_power(), 10);
        assert_eq!(ship.base_annual_cost(), 3000);
        assert_eq!(ship.annual_maintenance_cost(), 3000 + 500 + 150);
        assert!(ship.weapons().is_none());
        assert_eq!(ship.cargo_capacity(), Some(100));
        assert_eq!(ship.passenger_capacity(), Some(50));
    }

    #[test]
    fn test_fighter_cost() {
        let ship = Spaceship::fighter(
            "Viper",
            2000,
            2.5,
            Crew::new(),
            vec![Weapon::new("Cannon", 15, 60), Weapon::new("Missile", 5, 40)],
        );
        assert_eq!(ship.fire_power(), 30);
        assert_eq!(ship.annual_maintenance_cost(), 5100);
    }

    #[test]
    fn test_fighter_cost_floors_fractional_speed() {
        // 2500 + 1000 * 0.2505 = 2750.5 -> 2750
        let ship = Spaceship::fighter("Slow", 2000, 0.2505, Crew::new(), vec![]);
        assert_eq!(ship.annual_maintenance_cost(), 2750);
        assert_eq!(ship.fire_power(), 10);
    }

    #[test]
    fn test_decimal_speeds_not_exact_in_binary() {
        // 2.3 is stored as 2.29999995; each speed term must still be whole
        let fighter = Spaceship::fighter("F", 2000, 2.3, Crew::new(), vec![]);
        assert_eq!(fighter.annual_maintenance_cost(), 2500 + 2300);
        let fighter = Spaceship::fighter("G", 2000, 16.3, Crew::new(), vec![]);
        assert_eq!(fighter.annual_maintenance_cost(), 2500 + 16300);

        let viper = Spaceship::colonial_viper("V", 2000, 2.3, crew_of(1), vec![]);
        assert_eq!(viper.annual_maintenance_cost(), 4000 + 500 + 1150);

        let raider = Spaceship::cylon_raider("R", 2000, 2.3, Crew::new(), vec![]);
        assert_eq!(raider.annual_maintenance_cost(), 3500 + 2760);

        let registry = StealthRegistry::new();
        let cruiser = Spaceship::stealth_cruiser(&registry, "S", 2000, 2.3, Crew::new(), vec![]);
        assert_eq!(cruiser.annual_maintenance_cost(), 2500 + 2300 + 50);
    }

    #[test]
    fn test_decimal_speed_grid() {
        for tenths in 0..=200i64 {
            let speed = tenths as f32 / 10.0;
            let fighter = Spaceship::fighter("F", 2000, speed, Crew::new(), vec![]);
            assert_eq!(fighter.annual_maintenance_cost(), 2500 + 100 * tenths, "speed {speed}");
            let viper = Spaceship::colonial_viper("V", 2000, speed, Crew::new(), vec![]);
            assert_eq!(viper.annual_maintenance_cost(), 4000 + 50 * tenths, "speed {speed}");
            let raider = Spaceship::cylon_raider("R", 2000, speed, Crew::new(), vec![]);
            assert_eq!(raider.annual_maintenance_cost(), 3500 + 120 * tenths, "speed {speed}");
        }
    }

    #[test]
    fn test_bomber_cost() {
        let ship = Spaceship::bomber(
            "Heavy Raider",
            1995,
            1.0,
            Crew::new(),
            vec![Weapon::new("Nuke", 50, 120), Weapon::new("Flak", 10, 80)],
            3,
        );
        assert_eq!(ship.annual_maintenance_cost(), 5060);
        assert_eq!(ship.number_of_technicians(), Some(3));
        assert_eq!(ship.fire_power(), 70);
    }

    #[test]
    fn test_bomber_cost_rounds_half_up() {
        // 5000 + 15 * 1 / 10 = 5001.5 -> 5002
        let ship = Spaceship::bomber(
            "B",
            1995,
            1.0,
            Crew::new(),
            vec![Weapon::new("W", 1, 15)],
            1,
        );
        assert_eq!(ship.annual_maintenance_cost(), 5002);
        // 5000 + 14 * 1 / 10 = 5001.4 -> 5001
        let ship = Spaceship::bomber(
            "C",
            1995,
            1.0,
            Crew::new(),
            vec![Weapon::new("W", 1, 14)],
            1,
        );
        assert_eq!(ship.annual_maintenance_cost(), 5001);
    }

    #[test]
    fn test_colonial_viper_cost() {
        // 4000 + 100 + 500 * 2 + 500 * 1.5 = 5850
        let ship = Spaceship::colonial_viper(
            "Viper Mk II",
            1978,
            1.5,
            crew_of(2),
            vec![Weapon::new("Guns", 10, 100)],
        );
        assert_eq!(ship.annual_maintenance_cost(), 5850);
    }

    #[test]
    fn test_cylon_raider_cost() {
        // 3500 + 50 + 500 * 3 + 1200 * 2.25 = 7750
        let crew: Crew = (1..=3u32)
            .map(|i| Cylon::new(format!("Centurion {i}"), 5, 1, i))
            .collect();
        let ship = Spaceship::cylon_raider(
            "Raider",
            2003,
            2.25,
            crew,
            vec![Weapon::new("Gun", 5, 50)],
        );
        assert_eq!(ship.annual_maintenance_cost(), 7750);
        assert_eq!(ship.fire_power(), 15);
    }

    #[test]
    fn test_stealth_cruiser_counter_is_shared() {
        let registry = StealthRegistry::new();
        let first = Spaceship::stealth_cruiser_with_default_loadout(
            &registry,
            "S1",
            2005,
            1.0,
            Crew::new(),
        );
        // 2500 + 100 + 1000 + 50 * 1
        assert_eq!(first.annual_maintenance_cost(), 3650);
        let _second = Spaceship::stealth_cruiser_with_default_loadout(
            &registry,
            "S2",
            2005,
            1.0,
            Crew::new(),
        );
        let third = Spaceship::stealth_cruiser_with_default_loadout(
            &registry,
            "S3",
            2005,
            1.0,
            Crew::new(),
        );
        assert_eq!(registry.live_count(), 3);
        assert_eq!(third.annual_maintenance_cost(), 3600 + 150);
        assert_eq!(first.annual_maintenance_cost(), 3600 + 150);
    }

    #[test]
    fn test_stealth_registries_are_independent() {
        let a = StealthRegistry::new();
        let b = StealthRegistry::new();
        let ship = Spaceship::stealth_cruiser(&a, "Ghost", 2010, 0.0, Crew::new(), vec![]);
        Spaceship::stealth_cruiser(&b, "Shade", 2010, 0.0, Crew::new(), vec![]);
        Spaceship::stealth_cruiser(&b, "Wraith", 2010, 0.0, Crew::new(), vec![]);
        assert_eq!(ship.annual_maintenance_cost(), 2500 + 50);
    }

    #[test]
    fn test_stealth_default_loadout() {
        let registry = StealthRegistry::new();
        let ship = Spaceship::stealth_cruiser_with_default_loadout(
            &registry,
            "S",
            2005,
            1.0,
            Crew::new(),
        );
        assert_eq!(ship.weapons(), Some(&[Weapon::laser_cannons()][..]));
        assert_eq!(ship.fire_power(), 20);
    }

    #[test]
    fn test_fire_power_fixed_at_construction() {
        let mut weapons = vec![Weapon::new("Cannon", 20, 10)];
        let ship = Spaceship::fighter("F", 2000, 0.0, Crew::new(), weapons.clone());
        weapons.push(Weapon::new("Extra", 100, 1000));
        assert_eq!(ship.fire_power(), 30);
        assert_eq!(ship.annual_maintenance_cost(), 2510);
    }

    #[test]
    fn test_fire_power_with_extreme_weapons() {
        let weapons = vec![
            Weapon::new("Nova", i32::MAX, 0),
            Weapon::new("Nova II", 1, 0),
        ];
        let ship = Spaceship::bomber("Doom", 2000, 1.0, Crew::new(), weapons, 0);
        assert_eq!(ship.fire_power(), 10 + i64::from(i32::MAX) + 1);
    }

    #[test]
    fn test_equality_by_class_and_name() {
        let a = Spaceship::fighter("Galactica", 1978, 1.0, Crew::new(), vec![]);
        let b = Spaceship::fighter("Galactica", 2004, 9.0, Crew::new(), vec![]);
        let c = Spaceship::colonial_viper("Galactica", 1978, 1.0, Crew::new(), vec![]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_summary_layout() {
        let mut crew = Crew::new();
        crew.insert(Officer::new("Adama", 60, 40, Rank::Commander));
        let ship = Spaceship::bomber(
            "Raptor",
            2004,
            2.0,
            crew,
            vec![Weapon::new("Bomb", 5, 10)],
            2,
        );
        let expected = "Bomber\n\
            \tName=Raptor\n\
            \tCommissionYear=2004\n\
            \tMaximalSpeed=2.0\n\
            \tFirePower=15\n\
            \tCrewMembers=1\n\
            \tAnnualMaintenanceCost=5002\n\
            \tWeaponArray=[Weapon [name=Bomb, firePower=5, annualMaintenanceCost=10]]\n\
            \tNumberOfTechnicians=2";
        assert_eq!(ship.to_string(), expected);
    }

    #[test]
    fn test_transport_summary_layout() {
        let ship = Spaceship::transport_ship("Hauler", 1999, 0.5, Crew::new(), 10, 20);
        let text = ship.to_string();
        assert!(text.starts_with("TransportShip\n\tName=Hauler"));
        assert!(text.contains("\n\tMaximalSpeed=0.5\n"));
        assert!(!text.contains("WeaponArray"));
        assert!(text.ends_with("\tCargoCapacity=10\n\tPassengerCapacity=20"));
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(1.0), "1.0");
        assert_eq!(format_speed(2.5), "2.5");
        assert_eq!(format_speed(0.0), "0.0");
        assert_eq!(format_speed(2.3), "2.3");
        assert_eq!(format_speed(0.001), "0.001");
        assert_eq!(format_speed(1.0e-4), "1.0E-4");
        assert_eq!(format_speed(1.5e-5), "1.5E-5");
        assert_eq!(format_speed(1.0e7), "1.0E7");
        assert_eq!(format_speed(12_345_678.0), "1.2345678E7");
        assert_eq!(format_speed(f32::INFINITY), "Infinity");
    }
}
