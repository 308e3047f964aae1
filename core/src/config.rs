use crate::{
    error::{SimError, SimResult},
    types::{FlightNumber, Tick},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tunable constants for one run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Check-in throughput per tick.
    pub check_in_counters: u32,
    /// Security throughput per tick.
    pub security_gates: u32,
    /// Boarding throughput per flight per tick.
    pub boarding_rate: u32,
    pub chance_new_passenger: f64,
    pub chance_delayed: f64,
    pub delay_offset_ticks: Tick,
    pub boarding_lead_ticks: Tick,
    pub delay_check_lead_ticks: Tick,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            check_in_counters: 3,
            security_gates: 2,
            boarding_rate: 1,
            chance_new_passenger: 1.0,
            chance_delayed: 0.5,
            delay_offset_ticks: 3,
            boarding_lead_ticks: 2,
            delay_check_lead_ticks: 3,
            first_names: owned(&[
                "Joey", "Monica", "Chandler", "Rachel", "Ross",
                "Phoebe", "Jennifer", "Matthew", "Lisa", "David",
            ]),
            last_names: owned(&[
                "Tribbiani", "Geller", "Bing", "Green", "Schwimmer",
                "Buffay", "Cox", "Perry", "Kudrow", "LeBlanc",
            ]),
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SimConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the simulation cannot honour.
    pub fn validate(&self) -> SimResult<()> {
        check_probability("chance_new_passenger", self.chance_new_passenger)?;
        check_probability("chance_delayed", self.chance_delayed)?;
        if self.first_names.is_empty() {
            return Err(SimError::EmptyNamePool { pool: "first_names" });
        }
        if self.last_names.is_empty() {
            return Err(SimError::EmptyNamePool { pool: "last_names" });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> SimResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::ProbabilityOutOfRange { name, value })
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// One scheduled flight as supplied at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightSpec {
    pub flight_number: FlightNumber,
    pub destination: String,
    pub departure_tick: Tick,
    /// Signed so a bad roster file is reported as a configuration error.
    pub capacity: i64,
}

impl FlightSpec {
    pub fn new(flight_number: &str, destination: &str, departure_tick: Tick, capacity: i64) -> Self {
        Self {
            flight_number: flight_number.into(),
            destination: destination.into(),
            departure_tick,
            capacity,
        }
    }
}

/// Ordered flight roster. Order is preserved in reports and updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roster {
    pub flights: Vec<FlightSpec>,
}

impl Default for Roster {
    /// Small demo roster: tight capacities so every outcome shows up.
    fn default() -> Self {
        Self {
            flights: vec![
                FlightSpec::new("PS101", "Kyiv", 10, 12),
                FlightSpec::new("PS202", "Lviv", 8, 10),
                FlightSpec::new("PS303", "Odesa", 5, 2),
                FlightSpec::new("PS404", "Kharkov", 6, 4),
                FlightSpec::new("PS505", "Sevastopol", 10, 1),
            ],
        }
    }
}

impl Roster {
    pub fn new(flights: Vec<FlightSpec>) -> Self {
        Self { flights }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let roster: Roster = serde_json::from_str(&content)?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn validate(&self) -> SimResult<()> {
        let mut seen = HashSet::new();
        for spec in &self.flights {
            if spec.flight_number.trim().is_empty() {
                return Err(SimError::InvalidFlight {
                    flight_number: spec.flight_number.clone(),
                    reason: "flight number must not be empty".into(),
                });
            }
            if spec.capacity < 0 {
                return Err(SimError::NegativeCapacity {
                    flight_number: spec.flight_number.clone(),
                    capacity: spec.capacity,
                });
            }
            if !seen.insert(spec.flight_number.as_str()) {
                return Err(SimError::DuplicateFlight {
                    flight_number: spec.flight_number.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SimConfig::default().validate().unwrap();
        Roster::default().validate().unwrap();
        assert_eq!(Roster::default().flights.len(), 5);
    }

    #[test]
    fn probabilities_outside_unit_interval_rejected() {
        for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let config = SimConfig { chance_delayed: bad, ..SimConfig::default() };
            let err = config.validate().unwrap_err();
            assert!(matches!(err, SimError::ProbabilityOutOfRange { name: "chance_delayed", .. }));
        }
        let config = SimConfig { chance_new_passenger: 2.0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_name_pools_rejected() {
        let config = SimConfig { last_names: vec![], ..SimConfig::default() };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SimError::EmptyNamePool { pool: "last_names" }));
    }

    #[test]
    fn roster_rejects_duplicates_and_negative_capacity() {
        let dup = Roster::new(vec![
            FlightSpec::new("PS101", "Kyiv", 10, 12),
            FlightSpec::new("PS101", "Lviv", 8, 10),
        ]);
        assert!(matches!(dup.validate(), Err(SimError::DuplicateFlight { .. })));

        let negative = Roster::new(vec![FlightSpec::new("PS101", "Kyiv", 10, -1)]);
        assert!(matches!(
            negative.validate(),
            Err(SimError::NegativeCapacity { capacity: -1, .. })
        ));

        let blank = Roster::new(vec![FlightSpec::new("  ", "Kyiv", 10, 1)]);
        assert!(matches!(blank.validate(), Err(SimError::InvalidFlight { .. })));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{ "security_gates": 5 }"#).unwrap();
        assert_eq!(config.security_gates, 5);
        assert_eq!(config.check_in_counters, 3);
        assert_eq!(config.first_names.len(), 10);
    }
}
