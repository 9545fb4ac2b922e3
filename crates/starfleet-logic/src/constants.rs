//! Fleet constants: base costs, formula coefficients, default loadouts.
//!
//! Plain values with no runtime configuration. Every cost formula in
//! [`crate::ship`] reads its numbers from here.

/// Fire power every ship starts with before weapons are counted.
pub const BASE_FIRE_POWER: i64 = 10;

/// Base annual maintenance cost per ship class.
pub mod base_costs {
    pub const TRANSPORT_SHIP: i64 = 3000;
    pub const FIGHTER: i64 = 2500;
    pub const STEALTH_CRUISER: i64 = 2500;
    pub const BOMBER: i64 = 5000;
    pub const COLONIAL_VIPER: i64 = 4000;
    pub const CYLON_RAIDER: i64 = 3500;
}

/// Per-unit multipliers used by the class cost formulas.
pub mod coefficients {
    /// TransportShip: cost per unit of cargo capacity.
    pub const CARGO: i64 = 5;
    /// TransportShip: cost per passenger berth.
    pub const PASSENGER: i64 = 3;
    /// Fighter (and StealthCruiser): cost per unit of maximal speed.
    pub const FIGHTER_SPEED: f64 = 1000.0;
    /// Bomber: weapon cost × technicians is divided by this.
    pub const BOMBER_TECHNICIAN_DIVISOR: f64 = 10.0;
    /// ColonialViper: cost per crew member.
    pub const VIPER_CREW: i64 = 500;
    /// ColonialViper: cost per unit of maximal speed.
    pub const VIPER_SPEED: f64 = 500.0;
    /// CylonRaider: cost per crew member.
    pub const RAIDER_CREW: i64 = 500;
    /// CylonRaider: cost per unit of maximal speed.
    pub const RAIDER_SPEED: f64 = 1200.0;
    /// StealthCruiser: surcharge per live StealthCruiser.
    pub const STEALTH_SURCHARGE: i64 = 50;
}

/// Weapon fitted to a StealthCruiser built without an explicit loadout.
pub mod default_loadout {
    pub const NAME: &str = "Laser Cannons";
    pub const FIRE_POWER: i32 = 10;
    pub const ANNUAL_MAINTENANCE_COST: i64 = 100;
}
