//! Configuration errors surface from SimEngine::build, before any tick.

use airport_core::{
    config::{FlightSpec, Roster, SimConfig},
    engine::SimEngine,
    error::SimError,
};
use std::io::Write;

fn build(config: SimConfig, roster: Roster) -> Result<SimEngine, SimError> {
    SimEngine::build("config-test".into(), config, &roster)
}

#[test]
fn duplicate_flight_numbers_fail_fast() {
    let roster = Roster::new(vec![
        FlightSpec::new("PS101", "Kyiv", 10, 12),
        FlightSpec::new("PS101", "Lviv", 8, 10),
    ]);
    let err = build(SimConfig::default(), roster).err().expect("duplicate must fail");
    assert!(err.is_config_error());
    assert_eq!(err.to_string(), "Duplicate flight number 'PS101' in roster");
}

#[test]
fn negative_capacity_fails_fast() {
    let roster = Roster::new(vec![FlightSpec::new("PS303", "Odesa", 5, -2)]);
    let err = build(SimConfig::default(), roster).err().expect("negative capacity must fail");
    assert!(matches!(err, SimError::NegativeCapacity { capacity: -2, .. }));
}

#[test]
fn bad_probability_and_empty_pool_fail_fast() {
    let config = SimConfig { chance_new_passenger: 1.5, ..SimConfig::default() };
    let err = build(config, Roster::default()).err().unwrap();
    assert!(matches!(err, SimError::ProbabilityOutOfRange { name: "chance_new_passenger", .. }));

    let config = SimConfig { first_names: vec![], ..SimConfig::default() };
    let err = build(config, Roster::default()).err().unwrap();
    assert!(matches!(err, SimError::EmptyNamePool { pool: "first_names" }));
}

#[test]
fn defaults_build_the_demo_airport() {
    let engine = SimEngine::with_defaults("config-defaults".into()).unwrap();
    let numbers: Vec<_> = engine.store.flights().iter().map(|f| f.flight_number.as_str()).collect();
    assert_eq!(numbers, vec!["PS101", "PS202", "PS303", "PS404", "PS505"]);
    assert_eq!(engine.clock.current_tick, 0);
    assert!(!engine.is_complete());
}

#[test]
fn roster_and_config_load_from_json_files() {
    let dir = std::env::temp_dir().join(format!("airport-config-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let roster_path = dir.join("roster.json");
    let mut f = std::fs::File::create(&roster_path).unwrap();
    write!(
        f,
        r#"{{ "flights": [ {{ "flight_number": "LX1", "destination": "Zurich", "departure_tick": 7, "capacity": 3 }} ] }}"#
    )
    .unwrap();

    let config_path = dir.join("airport.json");
    std::fs::write(&config_path, r#"{ "boarding_rate": 2, "chance_delayed": 0.25 }"#).unwrap();

    let roster = Roster::load(roster_path.to_str().unwrap()).unwrap();
    let config = SimConfig::load(config_path.to_str().unwrap()).unwrap();
    assert_eq!(roster.flights[0].flight_number, "LX1");
    assert_eq!(config.boarding_rate, 2);
    assert_eq!(config.security_gates, 2);

    let bad_path = dir.join("bad_roster.json");
    std::fs::write(
        &bad_path,
        r#"{ "flights": [ { "flight_number": "LX1", "destination": "Zurich", "departure_tick": 7, "capacity": -1 } ] }"#,
    )
    .unwrap();
    assert!(Roster::load(bad_path.to_str().unwrap()).is_err());

    std::fs::remove_dir_all(&dir).ok();
}
