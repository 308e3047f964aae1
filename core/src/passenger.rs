use crate::{
    error::{SimError, SimResult},
    types::{FlightNumber, PassengerId, Tick},
};
use serde::{Deserialize, Serialize};

/// A traveller booked on exactly one flight.
///
/// Progress flags are acquired strictly in order (ticket, security,
/// boarding) and never reset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub flight_number: FlightNumber,
    has_ticket: bool,
    passed_security: bool,
    is_on_board: bool,
}

impl Passenger {
    pub fn new(id: PassengerId, name: impl Into<String>, flight_number: impl Into<FlightNumber>) -> Self {
        Self {
            id,
            name: name.into(),
            flight_number: flight_number.into(),
            has_ticket: false,
            passed_security: false,
            is_on_board: false,
        }
    }

    pub fn has_ticket(&self) -> bool {
        self.has_ticket
    }

    pub fn passed_security(&self) -> bool {
        self.passed_security
    }

    pub fn is_on_board(&self) -> bool {
        self.is_on_board
    }

    /// Ticketed, cleared security, not yet seated.
    pub fn is_boarding_eligible(&self) -> bool {
        self.has_ticket && self.passed_security && !self.is_on_board
    }

    pub fn check_in(&mut self, tick: Tick) -> SimResult<()> {
        if self.has_ticket {
            return Err(self.out_of_order(tick, "checked in twice"));
        }
        self.has_ticket = true;
        Ok(())
    }

    pub fn clear_security(&mut self, tick: Tick) -> SimResult<()> {
        if !self.has_ticket || self.passed_security {
            return Err(self.out_of_order(tick, "security clearance out of order"));
        }
        self.passed_security = true;
        Ok(())
    }

    pub fn board(&mut self, tick: Tick) -> SimResult<()> {
        if !self.is_boarding_eligible() {
            return Err(self.out_of_order(tick, "boarded without clearance"));
        }
        self.is_on_board = true;
        Ok(())
    }

    /// `is_on_board ⇒ passed_security ⇒ has_ticket`.
    pub fn flags_consistent(&self) -> bool {
        (!self.is_on_board || self.passed_security) && (!self.passed_security || self.has_ticket)
    }

    fn out_of_order(&self, tick: Tick, what: &str) -> SimError {
        SimError::invariant(
            tick,
            format!("passenger {} ({}) {what}", self.id, self.name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_advance_in_order() {
        let mut p = Passenger::new(1, "Ross Geller", "PS101");
        assert!(!p.is_boarding_eligible());
        p.check_in(1).unwrap();
        p.clear_security(1).unwrap();
        assert!(p.is_boarding_eligible());
        p.board(2).unwrap();
        assert!(p.is_on_board());
        assert!(!p.is_boarding_eligible());
        assert!(p.flags_consistent());
    }

    #[test]
    fn security_before_ticket_is_rejected() {
        let mut p = Passenger::new(1, "Joey Tribbiani", "PS202");
        let err = p.clear_security(3).unwrap_err();
        assert!(matches!(err, SimError::InvariantViolation { tick: 3, .. }));
        assert!(!p.passed_security());
    }

    #[test]
    fn boarding_twice_is_rejected() {
        let mut p = Passenger::new(9, "Monica Geller", "PS303");
        p.check_in(1).unwrap();
        p.clear_security(1).unwrap();
        p.board(2).unwrap();
        assert!(p.board(3).is_err());
        assert!(p.check_in(3).is_err());
    }
}
