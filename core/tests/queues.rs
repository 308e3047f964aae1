//! Check-in and security throughput and FIFO discipline.

use airport_core::{
    command::OperatorCommand,
    config::{FlightSpec, Roster, SimConfig},
    engine::SimEngine,
    event::SimEvent,
    rng::ScriptedRng,
    snapshot::TickReport,
};

fn build_with_walk_ins(n: usize) -> SimEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = SimConfig {
        chance_new_passenger: 0.0,
        chance_delayed: 0.0,
        ..SimConfig::default()
    };
    let roster = Roster::new(vec![FlightSpec::new("Q300", "Kyiv", 30, 20)]);
    let mut engine = SimEngine::build("queue-test".into(), config, &roster).expect("build engine");
    for i in 0..n {
        engine.submit(OperatorCommand::AdmitPassenger {
            name: format!("Walk In{i}"),
            flight_number: "Q300".into(),
        });
    }
    engine
}

fn checked_in(report: &TickReport) -> Vec<u64> {
    report
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::PassengerCheckedIn { passenger_id, .. } => Some(*passenger_id),
            _ => None,
        })
        .collect()
}

fn cleared(report: &TickReport) -> Vec<u64> {
    report
        .events
        .iter()
        .filter_map(|e| match e {
            SimEvent::SecurityCleared { passenger_id, .. } => Some(*passenger_id),
            _ => None,
        })
        .collect()
}

#[test]
fn checkpoints_respect_throughput_in_fifo_order() {
    let mut engine = build_with_walk_ins(10);
    let mut rng = ScriptedRng::constant(0.0);

    let tick1 = engine.tick(&mut rng).unwrap();
    assert_eq!(checked_in(&tick1), vec![1, 2, 3]);
    assert_eq!(cleared(&tick1), vec![1, 2]);
    assert_eq!(tick1.check_in_queue, 7);
    assert_eq!(tick1.security_queue, 1);
    assert_eq!(tick1.boarding_eligible, 2);

    let tick2 = engine.tick(&mut rng).unwrap();
    assert_eq!(checked_in(&tick2), vec![4, 5, 6]);
    assert_eq!(cleared(&tick2), vec![3, 4]);
    assert_eq!(tick2.check_in_queue, 4);
    assert_eq!(tick2.security_queue, 2);
}

#[test]
fn backlog_drains_over_later_ticks() {
    let mut engine = build_with_walk_ins(10);
    let reports = engine.run_ticks(6, &mut ScriptedRng::constant(0.0)).unwrap();

    let all_cleared: Vec<u64> = reports.iter().flat_map(cleared).collect();
    assert_eq!(all_cleared, (1..=10).collect::<Vec<_>>());
    for report in &reports {
        assert!(checked_in(report).len() <= 3);
        assert!(cleared(report).len() <= 2);
    }
    let last = reports.last().unwrap();
    assert_eq!(last.check_in_queue, 0);
    assert_eq!(last.security_queue, 0);
    assert_eq!(last.boarding_eligible, 10);
}

#[test]
fn security_only_sees_ticketed_passengers() {
    let mut engine = build_with_walk_ins(4);
    let mut rng = ScriptedRng::constant(0.0);
    engine.tick(&mut rng).unwrap();

    for id in engine.store.security().iter() {
        let p = engine.store.passenger(id).unwrap();
        assert!(p.has_ticket());
        assert!(!p.passed_security());
    }
    for id in engine.store.check_in().iter() {
        assert!(!engine.store.passenger(id).unwrap().has_ticket());
    }
}
