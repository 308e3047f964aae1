//! Passenger name generation from the configured name pools.
//!
//! All generation is deterministic (same draws = same names).

use crate::{config::SimConfig, rng::RandomSource};

/// Draws "First Last" names from the first/last name pools.
pub struct NameGenerator {
    first_names: Vec<String>,
    last_names: Vec<String>,
}

impl NameGenerator {
    /// Pools must be non-empty; `SimConfig::validate` guarantees it.
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            first_names: config.first_names.clone(),
            last_names: config.last_names.clone(),
        }
    }

    /// Generate a full name (first + last), first name drawn first.
    pub fn generate_full_name(&self, rng: &mut dyn RandomSource) -> String {
        let first = Self::pick(&self.first_names, rng);
        let last = Self::pick(&self.last_names, rng);
        format!("{first} {last}")
    }

    fn pick<'a>(pool: &'a [String], rng: &mut dyn RandomSource) -> &'a str {
        let index = rng.next_u64_below(pool.len() as u64) as usize;
        &pool[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SimRng};

    #[test]
    fn name_generation_is_deterministic() {
        let names = NameGenerator::from_config(&SimConfig::default());
        let mut rng1 = SimRng::new(12345);
        let mut rng2 = SimRng::new(12345);
        for _ in 0..20 {
            assert_eq!(
                names.generate_full_name(&mut rng1),
                names.generate_full_name(&mut rng2),
                "Same seed should produce same name"
            );
        }
    }

    #[test]
    fn draws_first_then_last() {
        let names = NameGenerator::from_config(&SimConfig::default());
        // 0.0 -> first entry, 0.95 -> last entry of a 10-name pool
        let mut rng = ScriptedRng::new(vec![0.0, 0.95]);
        assert_eq!(names.generate_full_name(&mut rng), "Joey LeBlanc");
    }

    #[test]
    fn generates_two_part_names() {
        let names = NameGenerator::from_config(&SimConfig::default());
        let mut rng = SimRng::new(99);
        for _ in 0..100 {
            let name = names.generate_full_name(&mut rng);
            let parts: Vec<&str> = name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "Name should have exactly 2 parts: {name}");
        }
    }
}
