//! Starfleet Headless Harness
//!
//! Builds a demo fleet and a sweep of seeded random fleets, runs every
//! fleet report over them and checks the results against per-ship values.
//! Runs entirely in-process with no files or networking.
//!
//! Usage:
//!   cargo run -p starfleet-simtest
//!   cargo run -p starfleet-simtest -- --verbose --sweeps 500
//!   cargo run -p starfleet-simtest -- --json

use std::sync::Arc;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use starfleet_logic::audit::{audit_fleet, FleetIssue};
use starfleet_logic::crew::{Crew, CrewMember, CrewWoman, Cylon, Officer, Rank};
use starfleet_logic::error::FleetError;
use starfleet_logic::fleet::{self, FleetReport};
use starfleet_logic::ordering::by_fire_power_and_commission_year;
use starfleet_logic::ship::{ShipClass, Spaceship, StealthRegistry};
use starfleet_logic::weapon::Weapon;

#[derive(Debug, Parser)]
#[command(name = "starfleet-simtest", about = "Headless harness for Starfleet fleet logic")]
struct Args {
    /// Print every check and the demo fleet reports, not just failures
    #[arg(short, long)]
    verbose: bool,

    /// Print the demo fleet report as JSON and exit
    #[arg(long)]
    json: bool,

    /// Seed for the random fleet sweep
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of random fleets to check
    #[arg(long, default_value_t = 100)]
    sweeps: u64,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    if args.json {
        let registry = StealthRegistry::new();
        let report = FleetReport::compile(&demo_fleet(&registry));
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("failed to serialize fleet report: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== Starfleet Harness ===\n");

    let mut results = Vec::new();

    // 1. Per-class cost formulas
    results.extend(validate_cost_formulas());

    // 2. Shared stealth counter
    results.extend(validate_stealth_registry());

    // 3. Reports over the demo fleet
    results.extend(validate_demo_fleet(args.verbose));

    // 4. Audit findings
    results.extend(validate_audit());

    // 5. Random fleet sweep
    results.extend(validate_random_sweep(args.seed, args.sweeps));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Fleets ──────────────────────────────────────────────────────────────

fn demo_fleet(registry: &Arc<StealthRegistry>) -> Vec<Spaceship> {
    let mut galactica_crew = Crew::new();
    galactica_crew.insert(Officer::new("William Adama", 60, 40, Rank::Admiral));
    galactica_crew.insert(Officer::new("Saul Tigh", 62, 38, Rank::Commander));
    galactica_crew.insert(Officer::new("Felix Gaeta", 30, 8, Rank::Lieutenant));
    galactica_crew.insert(CrewWoman::new("Anastasia Dualla", 27, 6));
    galactica_crew.insert(CrewWoman::new("Galen Tyrol", 35, 14));

    let mut viper_crew = Crew::new();
    viper_crew.insert(CrewWoman::new("Louanne Katraine", 26, 4));

    let mut fighter_crew = Crew::new();
    fighter_crew.insert(Officer::new("Lee Adama", 32, 10, Rank::Captain));
    fighter_crew.insert(Officer::new("Kara Thrace", 30, 9, Rank::Captain));

    let mut raptor_crew = Crew::new();
    raptor_crew.insert(Officer::new("Karl Agathon", 31, 9, Rank::Lieutenant));
    raptor_crew.insert(Officer::new("Sharon Valerii", 27, 5, Rank::Ensign));

    let raider_crew: Crew = (1..=3u32)
        .map(|i| Cylon::new(format!("Centurion {i}"), 2, 1, 0))
        .collect();

    let mut transport_crew = Crew::new();
    transport_crew.insert(Officer::new("Laura Roslin", 55, 2, Rank::Admiral));
    transport_crew.insert(CrewWoman::new("Billy Keikeya", 24, 2));

    let kew = || Weapon::new("Kinetic Energy Weapon", 20, 60);

    vec![
        Spaceship::transport_ship("Colonial One", 1975, 1.0, transport_crew, 400, 120),
        Spaceship::transport_ship("Astral Queen", 1960, 0.5, Crew::new(), 1500, 300),
        Spaceship::bomber(
            "Galactica",
            1978,
            0.75,
            galactica_crew,
            vec![
                Weapon::new("Flak Battery", 30, 120),
                Weapon::new("Nuclear Warhead", 80, 200),
                kew(),
            ],
            12,
        ),
        Spaceship::fighter(
            "Viper 7242",
            2003,
            2.5,
            fighter_crew,
            vec![kew(), Weapon::new("Missile Pod", 15, 40)],
        ),
        Spaceship::fighter(
            "Raptor 312",
            2003,
            1.75,
            raptor_crew,
            vec![Weapon::new("Missile Pod", 15, 40)],
        ),
        Spaceship::colonial_viper("Viper Mk II", 1978, 2.0, viper_crew, vec![kew()]),
        Spaceship::cylon_raider(
            "Heavy Raider",
            2004,
            2.25,
            raider_crew,
            vec![Weapon::new("Raider Missiles", 25, 70)],
        ),
        Spaceship::stealth_cruiser_with_default_loadout(
            registry,
            "Blackbird",
            2005,
            3.0,
            Crew::new(),
        ),
    ]
}

fn random_crew(rng: &mut SmallRng, ship_index: usize) -> Crew {
    let size = rng.gen_range(0..8);
    let mut crew = Crew::new();
    for i in 0..size {
        let name = format!("crew-{ship_index}-{i}");
        let age = rng.gen_range(18..75);
        let member: CrewMember = match rng.gen_range(0..3) {
            0 => {
                let rank = Rank::all()[rng.gen_range(0..Rank::all().len())];
                Officer::new(name, age, age - 18, rank).into()
            }
            1 => CrewWoman::new(name, age, age - 18).into(),
            _ => Cylon::new(name, age, 0, rng.gen_range(1..13)).into(),
        };
        crew.insert(member);
    }
    crew
}

fn random_weapons(rng: &mut SmallRng) -> Vec<Weapon> {
    (0..rng.gen_range(0..5))
        .map(|i| {
            Weapon::new(
                format!("weapon-{i}"),
                rng.gen_range(0..60),
                rng.gen_range(0..400),
            )
        })
        .collect()
}

fn random_fleet(rng: &mut SmallRng, registry: &Arc<StealthRegistry>) -> Vec<Spaceship> {
    let size = rng.gen_range(0..16);
    let mut ships = Vec::with_capacity(size);
    for i in 0..size {
        let name = format!("ship-{i}");
        let year = rng.gen_range(1950..2060);
        let speed = rng.gen_range(0..120) as f32 / 10.0;
        let crew = random_crew(rng, i);
        let class = ShipClass::all()[rng.gen_range(0..ShipClass::all().len())];
        let ship = match class {
            ShipClass::TransportShip => {
                let cargo = rng.gen_range(0..2000);
                let passengers = rng.gen_range(0..600);
                Spaceship::transport_ship(name, year, speed, crew, cargo, passengers)
            }
            ShipClass::Fighter => Spaceship::fighter(name, year, speed, crew, random_weapons(rng)),
            ShipClass::StealthCruiser => {
                let weapons = random_weapons(rng);
                if weapons.is_empty() {
                    Spaceship::stealth_cruiser_with_default_loadout(
                        registry,
                        name,
                        year,
                        speed,
                        crew,
                    )
                } else {
                    Spaceship::stealth_cruiser(registry, name, year, speed, crew, weapons)
                }
            }
            ShipClass::Bomber => {
                let weapons = random_weapons(rng);
                let technicians = rng.gen_range(0..12);
                Spaceship::bomber(name, year, speed, crew, weapons, technicians)
            }
            ShipClass::ColonialViper => {
                Spaceship::colonial_viper(name, year, speed, crew, random_weapons(rng))
            }
            ShipClass::CylonRaider => {
                Spaceship::cylon_raider(name, year, speed, crew, random_weapons(rng))
            }
        };
        ships.push(ship);
    }
    ships
}

// ── 1. Cost Formulas ────────────────────────────────────────────────────

fn validate_cost_formulas() -> Vec<TestResult> {
    println!("--- Cost Formulas ---");
    let mut results = Vec::new();

    let fighter = Spaceship::fighter(
        "Viper",
        2003,
        2.5,
        Crew::new(),
        vec![Weapon::new("Cannon", 20, 60), Weapon::new("Missile", 5, 40)],
    );
    results.push(TestResult {
        name: "cost_fighter".into(),
        passed: fighter.annual_maintenance_cost() == 5100,
        detail: format!("speed 2.5, weapons 100 → {}", fighter.annual_maintenance_cost()),
    });
    results.push(TestResult {
        name: "fire_power_fighter".into(),
        passed: fighter.fire_power() == 35,
        detail: format!("10 + 20 + 5 → {}", fighter.fire_power()),
    });

    // 2.3 has no exact binary form; the speed term must still be 2300
    let decimal = Spaceship::fighter("Viper 2", 2003, 2.3, Crew::new(), vec![]);
    results.push(TestResult {
        name: "cost_fighter_decimal_speed".into(),
        passed: decimal.annual_maintenance_cost() == 4800,
        detail: format!("speed 2.3, no weapons → {}", decimal.annual_maintenance_cost()),
    });

    let bomber = Spaceship::bomber(
        "Raptor",
        1998,
        1.0,
        Crew::new(),
        vec![Weapon::new("Nuke", 80, 150), Weapon::new("Flak", 10, 50)],
        3,
    );
    results.push(TestResult {
        name: "cost_bomber".into(),
        passed: bomber.annual_maintenance_cost() == 5060,
        detail: format!("weapons 200, 3 technicians → {}", bomber.annual_maintenance_cost()),
    });

    let transport = Spaceship::transport_ship("Hauler", 1990, 1.0, Crew::new(), 100, 50);
    results.push(TestResult {
        name: "cost_transport".into(),
        passed: transport.annual_maintenance_cost() == 3650 && transport.fire_power() == 10,
        detail: format!(
            "cargo 100, passengers 50 → {} (fire power {})",
            transport.annual_maintenance_cost(),
            transport.fire_power()
        ),
    });

    let viper_crew: Crew = (0..2)
        .map(|i| CrewWoman::new(format!("Pilot {i}"), 25, 3))
        .collect();
    let viper = Spaceship::colonial_viper(
        "Viper Mk II",
        1978,
        1.5,
        viper_crew,
        vec![Weapon::new("Guns", 10, 100)],
    );
    results.push(TestResult {
        name: "cost_colonial_viper".into(),
        passed: viper.annual_maintenance_cost() == 5850,
        detail: format!("crew 2, speed 1.5, weapons 100 → {}", viper.annual_maintenance_cost()),
    });

    let raider_crew: Crew = (0..3u32)
        .map(|i| Cylon::new(format!("Centurion {i}"), 2, 1, i))
        .collect();
    let raider = Spaceship::cylon_raider(
        "Raider",
        2004,
        2.25,
        raider_crew,
        vec![Weapon::new("Gun", 5, 50)],
    );
    results.push(TestResult {
        name: "cost_cylon_raider".into(),
        passed: raider.annual_maintenance_cost() == 7750,
        detail: format!("crew 3, speed 2.25, weapons 50 → {}", raider.annual_maintenance_cost()),
    });

    // Derived values are frozen: the caller's list changing afterwards is invisible
    let mut weapons = vec![Weapon::new("Cannon", 20, 10)];
    let frozen = Spaceship::fighter("Frozen", 2000, 0.0, Crew::new(), weapons.clone());
    weapons.push(Weapon::new("Late Addition", 100, 1000));
    results.push(TestResult {
        name: "derived_values_frozen".into(),
        passed: frozen.fire_power() == 30 && frozen.annual_maintenance_cost() == 2510,
        detail: format!(
            "fire power {} cost {} after caller list grew to {}",
            frozen.fire_power(),
            frozen.annual_maintenance_cost(),
            weapons.len()
        ),
    });

    results
}

// ── 2. Stealth Registry ─────────────────────────────────────────────────

fn validate_stealth_registry() -> Vec<TestResult> {
    println!("--- Stealth Registry ---");
    let mut results = Vec::new();

    let registry = StealthRegistry::new();
    let cruisers: Vec<Spaceship> = (1..=3)
        .map(|i| {
            Spaceship::stealth_cruiser_with_default_loadout(
                &registry,
                format!("Shade {i}"),
                2010,
                1.0,
                Crew::new(),
            )
        })
        .collect();

    let costs: Vec<i64> = cruisers.iter().map(Spaceship::annual_maintenance_cost).collect();
    results.push(TestResult {
        name: "stealth_shared_surcharge".into(),
        passed: costs.iter().all(|&c| c == 3600 + 150),
        detail: format!("3 cruisers → costs {:?}", costs),
    });

    results.push(TestResult {
        name: "stealth_default_loadout".into(),
        passed: cruisers
            .iter()
            .all(|c| c.weapons() == Some(&[Weapon::laser_cannons()][..]) && c.fire_power() == 20),
        detail: "Laser Cannons fitted when no weapons given".into(),
    });

    let other = StealthRegistry::new();
    let lone = Spaceship::stealth_cruiser(&other, "Lone", 2010, 0.0, Crew::new(), vec![]);
    results.push(TestResult {
        name: "stealth_registries_independent".into(),
        passed: lone.annual_maintenance_cost() == 2550 && other.live_count() == 1,
        detail: format!(
            "separate registry → cost {} (first registry at {})",
            lone.annual_maintenance_cost(),
            registry.live_count()
        ),
    });

    results
}

// ── 3. Demo Fleet Reports ───────────────────────────────────────────────

fn validate_demo_fleet(verbose: bool) -> Vec<TestResult> {
    println!("--- Demo Fleet Reports ---");
    let mut results = Vec::new();

    let registry = StealthRegistry::new();
    let fleet = demo_fleet(&registry);
    let report = FleetReport::compile(&fleet);

    let per_ship_cost: i64 = fleet.iter().map(Spaceship::annual_maintenance_cost).sum();
    results.push(TestResult {
        name: "demo_total_cost".into(),
        passed: report.total_maintenance_cost == per_ship_cost,
        detail: format!("total maintenance {}", report.total_maintenance_cost),
    });

    let per_ship_crew: usize = fleet.iter().map(|s| s.crew().len()).sum();
    results.push(TestResult {
        name: "demo_total_crew".into(),
        passed: report.total_crew_members == per_ship_crew,
        detail: format!("{} crew members", report.total_crew_members),
    });

    let transports = report.instance_count_by_type.get("TransportShip").copied();
    let fighters = report.instance_count_by_type.get("Fighter").copied();
    results.push(TestResult {
        name: "demo_instance_counts".into(),
        passed: transports == Some(2)
            && fighters == Some(2)
            && report.instance_count_by_type.len() == 6,
        detail: format!("{:?}", report.instance_count_by_type),
    });

    let first_line = report
        .ship_descriptions
        .first()
        .and_then(|d| d.lines().nth(1))
        .unwrap_or_default();
    results.push(TestResult {
        name: "demo_strongest_first".into(),
        passed: first_line == "\tName=Galactica",
        detail: format!("first description {first_line:?}"),
    });

    results.push(TestResult {
        name: "demo_weapon_names".into(),
        passed: report.weapon_names.len() == 6 && report.weapon_names.contains("Laser Cannons"),
        detail: format!("{} distinct weapons", report.weapon_names.len()),
    });

    let ages: Vec<u32> = fleet
        .iter()
        .flat_map(|s| s.crew().officers())
        .map(Officer::age)
        .collect();
    let expected_avg = ages.iter().map(|&a| a as f64).sum::<f64>() / ages.len() as f64;
    results.push(TestResult {
        name: "demo_average_officer_age".into(),
        passed: report
            .average_officer_age
            .is_some_and(|avg| (avg - expected_avg).abs() < 1e-9),
        detail: format!("{:?} over {} officers", report.average_officer_age, ages.len()),
    });

    let commander_of = |ship: &str| {
        report
            .commanding_officers
            .iter()
            .find(|entry| entry.ship == ship)
            .map(|entry| entry.officer.as_str())
    };
    let commanders_ok = commander_of("Galactica") == Some("William Adama")
        && commander_of("Viper 7242") == Some("Lee Adama")
        && commander_of("Blackbird").is_none();
    results.push(TestResult {
        name: "demo_commanding_officers".into(),
        passed: commanders_ok,
        detail: format!("{} ships with officers", report.commanding_officers.len()),
    });

    let popularity_sorted = report.officer_ranks_by_popularity.windows(2).all(|pair| {
        pair[0].count < pair[1].count
            || (pair[0].count == pair[1].count && pair[0].rank < pair[1].rank)
    });
    results.push(TestResult {
        name: "demo_rank_popularity_order".into(),
        passed: popularity_sorted,
        detail: report
            .officer_ranks_by_popularity
            .iter()
            .map(|e| format!("{}×{}", e.rank, e.count))
            .collect::<Vec<_>>()
            .join(", "),
    });

    if verbose {
        println!("  Ships, strongest first:");
        for description in &report.ship_descriptions {
            for line in description.lines() {
                println!("    {line}");
            }
        }
    }

    results
}

// ── 4. Audit ────────────────────────────────────────────────────────────

fn validate_audit() -> Vec<TestResult> {
    println!("--- Fleet Audit ---");
    let mut results = Vec::new();

    let registry = StealthRegistry::new();
    let clean = audit_fleet(&demo_fleet(&registry));
    results.push(TestResult {
        name: "audit_demo_clean".into(),
        passed: clean.is_empty(),
        detail: format!("{} findings on the demo fleet", clean.len()),
    });

    let adama = || Officer::new("William Adama", 60, 40, Rank::Admiral);
    let mut raider_crew = Crew::new();
    raider_crew.insert(adama());
    let messy = vec![
        Spaceship::fighter(
            "Galactica",
            1978,
            1.0,
            [adama()].into_iter().collect(),
            vec![],
        ),
        Spaceship::fighter("Galactica", 2004, 1.0, Crew::new(), vec![]),
        Spaceship::cylon_raider("Raider", 2004, 1.0, raider_crew, vec![]),
    ];
    let issues = audit_fleet(&messy);
    let has_duplicate = issues
        .iter()
        .any(|i| matches!(i, FleetIssue::DuplicateShip { .. }));
    let has_shared_officer = issues
        .iter()
        .any(|i| matches!(i, FleetIssue::OfficerOnMultipleShips { .. }));
    let has_wrong_crew = issues
        .iter()
        .any(|i| matches!(i, FleetIssue::UnexpectedCrew { .. }));
    results.push(TestResult {
        name: "audit_detects_problems".into(),
        passed: has_duplicate && has_shared_officer && has_wrong_crew,
        detail: format!("{} findings", issues.len()),
    });

    results
}

// ── 5. Random Sweep ─────────────────────────────────────────────────────

fn validate_random_sweep(seed: u64, sweeps: u64) -> Vec<TestResult> {
    println!("--- Random Fleet Sweep ({} fleets, seed {}) ---", sweeps, seed);
    let mut results = Vec::new();
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut cost_mismatch = 0;
    let mut crew_mismatch = 0;
    let mut order_violations = 0;
    let mut fire_power_mismatch = 0;
    let mut officer_mismatch = 0;
    let mut ships_checked = 0;

    for _ in 0..sweeps {
        let registry = StealthRegistry::new();
        let fleet = random_fleet(&mut rng, &registry);
        ships_checked += fleet.len();

        let per_ship: i64 = fleet.iter().map(Spaceship::annual_maintenance_cost).sum();
        if fleet::total_maintenance_cost(&fleet) != per_ship {
            cost_mismatch += 1;
        }

        let crew: usize = fleet.iter().map(|s| s.crew().len()).sum();
        if fleet::total_crew_members(&fleet) != crew {
            crew_mismatch += 1;
        }

        for ship in &fleet {
            let expected = 10 + ship
                .weapons()
                .map_or(0, |w| w.iter().map(|x| i64::from(x.fire_power())).sum::<i64>());
            if ship.fire_power() != expected {
                fire_power_mismatch += 1;
            }
        }

        let mut sorted: Vec<&Spaceship> = fleet.iter().collect();
        sorted.sort_by(|a, b| by_fire_power_and_commission_year(a, b));
        let in_order = sorted.windows(2).all(|pair| {
            let (a, b) = (pair[0], pair[1]);
            (b.fire_power(), b.commission_year(), a.name())
                <= (a.fire_power(), a.commission_year(), b.name())
        });
        let descriptions: Vec<String> = sorted.iter().map(|s| s.to_string()).collect();
        if !in_order || descriptions != fleet::ship_descriptions_sorted(&fleet) {
            order_violations += 1;
        }

        let officers = fleet.iter().flat_map(|s| s.crew().officers()).count();
        let histogram_total: usize = fleet::officer_ranks_by_popularity(&fleet)
            .iter()
            .map(|e| e.count)
            .sum();
        let average_ok = match fleet::average_officer_age(&fleet) {
            Ok(_) => officers > 0,
            Err(FleetError::NoOfficers) => officers == 0,
        };
        if histogram_total != officers || !average_ok {
            officer_mismatch += 1;
        }
    }

    results.push(TestResult {
        name: "sweep_total_cost".into(),
        passed: cost_mismatch == 0,
        detail: format!("{} fleets with cost mismatch", cost_mismatch),
    });
    results.push(TestResult {
        name: "sweep_total_crew".into(),
        passed: crew_mismatch == 0,
        detail: format!("{} fleets with crew mismatch", crew_mismatch),
    });
    results.push(TestResult {
        name: "sweep_fire_power".into(),
        passed: fire_power_mismatch == 0,
        detail: format!("{} of {} ships with wrong fire power", fire_power_mismatch, ships_checked),
    });
    results.push(TestResult {
        name: "sweep_description_order".into(),
        passed: order_violations == 0,
        detail: format!("{} fleets out of order", order_violations),
    });
    results.push(TestResult {
        name: "sweep_officer_stats".into(),
        passed: officer_mismatch == 0,
        detail: format!("{} fleets with inconsistent officer stats", officer_mismatch),
    });

    results
}
