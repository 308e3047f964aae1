//! Plain-text rendering of tick reports.

use airport_core::{event::SimEvent, snapshot::TickReport, summary::RunSummary};
use std::fmt::Write;

pub fn render_event(event: &SimEvent) -> String {
    match event {
        SimEvent::PassengerArrived { name, flight_number, .. } => {
            format!("[EVENT] {name} arrived for flight {flight_number}")
        }
        SimEvent::BookingRejected { name, flight_number, reason, .. } => {
            format!("[EVENT] {name} turned away from {flight_number} ({reason})")
        }
        SimEvent::PassengerCheckedIn { name, flight_number, .. } => {
            format!("[CHECK-IN] {name} checked in for {flight_number}")
        }
        SimEvent::SecurityCleared { name, .. } => format!("[SECURITY] {name} passed security"),
        SimEvent::FlightDelayed { flight_number, new_departure_tick, .. } => {
            format!("[FLIGHT] {flight_number} is Delayed! New departure time: {new_departure_tick}")
        }
        SimEvent::BoardingStarted { flight_number, .. } => format!("[FLIGHT] {flight_number} is Boarding!"),
        SimEvent::PassengerBoarded { name, flight_number, .. } => {
            format!("[BOARDING] {name} boarded {flight_number}")
        }
        SimEvent::FlightDeparted { flight_number, passengers_on_board, .. } => {
            format!("[FLIGHT] {flight_number} is Departed! ({passengers_on_board} on board)")
        }
        SimEvent::DeniedBoarding { name, flight_number, .. } => {
            format!("[NO SEAT] Passenger {name} could not board {flight_number} (no seats left).")
        }
        SimEvent::MissedFlight { name, flight_number, .. } => {
            format!("[NO TIME] Passenger {name} missed flight {flight_number}!")
        }
        SimEvent::PassengerAbandoned { name, flight_number, .. } => {
            format!("[NO TICKET] Passenger {name} never checked in for {flight_number}.")
        }
    }
}

pub fn render_report(report: &TickReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Simulation Tick {} ===", report.tick);
    for event in &report.events {
        let _ = writeln!(out, "{}", render_event(event));
    }

    let _ = writeln!(out, "\n--- Flight Status ---");
    for f in &report.flights {
        let _ = writeln!(out, "{f} [{}/{}]", f.boarded, f.capacity);
    }

    let _ = writeln!(out, "\n--- Queues ---");
    let _ = writeln!(out, "Check-in queue: {}", report.check_in_queue);
    let _ = writeln!(out, "Security queue: {}", report.security_queue);
    let _ = writeln!(out, "Waiting for boarding: {}\n", report.boarding_eligible);
    out
}

pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== RUN SUMMARY ===");
    let _ = writeln!(out, "  final tick:        {}", summary.final_tick);
    let _ = writeln!(out, "  passengers:        {}", summary.passengers_created);
    let _ = writeln!(out, "  boarded:           {}", summary.boarded);
    let _ = writeln!(out, "  no seat:           {}", summary.denied_boarding);
    let _ = writeln!(out, "  no time:           {}", summary.missed);
    let _ = writeln!(out, "  never checked in:  {}", summary.abandoned);
    let _ = writeln!(out, "  flights delayed:   {}", summary.flights_delayed);
    let _ = writeln!(out, "  flights departed:  {}", summary.flights_departed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use airport_core::{engine::SimEngine, rng::ScriptedRng};

    #[test]
    fn report_lists_flights_and_queues() {
        let mut engine = SimEngine::with_defaults("render-test".into()).unwrap();
        let report = engine.tick(&mut ScriptedRng::constant(0.0)).unwrap();
        let text = render_report(&report);

        assert!(text.starts_with("=== Simulation Tick 1 ==="));
        assert!(text.contains("[EVENT] Joey Tribbiani arrived for flight PS101"));
        assert!(text.contains("PS505 to Sevastopol - OnTime (Departs at 10) [0/1]"));
        assert!(text.contains("Check-in queue: 0"));
        assert!(text.contains("Waiting for boarding: 1"));
    }
}
