//! Growing condition readings.
//!
//! Evaluators never read conditions directly, they go through the
//! [`GrowingConditions`] trait so the source can be swapped out.

use std::env;

use tracing::{debug, warn};

/// Environment variable holding the water reading
pub const WATER_VAR: &'static str = "GROW_WATER";

/// Environment variable holding the soil reading
pub const SOIL_VAR: &'static str = "GROW_SOIL";

/// Environment variable holding the seed reading
pub const SEED_VAR: &'static str = "GROW_SEED";

/// Something that can tell us how much water, soil and seed we have.
///
/// Readings are taken fresh on every call.
pub trait GrowingConditions {
    fn water(&self) -> i32;
    fn soil(&self) -> i32;
    fn seed(&self) -> i32;
}

/// Reads conditions from `GROW_WATER`, `GROW_SOIL` and `GROW_SEED`.
///
/// A variable that is unset or not an integer reads as 0.
#[derive(Debug, Default)]
pub struct EnvConditions;

impl EnvConditions {
    pub fn new() -> EnvConditions {
        EnvConditions
    }

    fn read(&self, var: &str) -> i32 {
        match env::var(var) {
            Ok(raw) => parse_reading(var, &raw),
            Err(env::VarError::NotPresent) => {
                debug!(var, "reading not set, using 0");
                0
            }
            Err(env::VarError::NotUnicode(_)) => {
                warn!(var, "reading is not valid unicode, using 0");
                0
            }
        }
    }
}

fn parse_reading(var: &str, raw: &str) -> i32 {
    match raw.trim().parse::<i32>() {
        Ok(value) => {
            debug!(var, value, "read growing condition");
            value
        }
        Err(err) => {
            warn!(var, raw, %err, "reading is not an integer, using 0");
            0
        }
    }
}

impl GrowingConditions for EnvConditions {
    fn water(&self) -> i32 {
        self.read(WATER_VAR)
    }

    fn soil(&self) -> i32 {
        self.read(SOIL_VAR)
    }

    fn seed(&self) -> i32 {
        self.read(SEED_VAR)
    }
}

/// Constant readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedConditions {
    pub water: i32,
    pub soil: i32,
    pub seed: i32,
}

impl FixedConditions {
    pub fn new(water: i32, soil: i32, seed: i32) -> FixedConditions {
        FixedConditions { water, soil, seed }
    }
}

impl GrowingConditions for FixedConditions {
    fn water(&self) -> i32 {
        self.water
    }

    fn soil(&self) -> i32 {
        self.soil
    }

    fn seed(&self) -> i32 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_conditions() {
        let conditions = FixedConditions::new(1, 2, 3);
        assert_eq!(conditions.water(), 1);
        assert_eq!(conditions.soil(), 2);
        assert_eq!(conditions.seed(), 3);
    }

    #[test]
    fn test_parse_reading() {
        assert_eq!(parse_reading(WATER_VAR, "7"), 7);
        assert_eq!(parse_reading(WATER_VAR, " -2\n"), -2);
    }

    #[test]
    fn test_parse_bad_reading() {
        assert_eq!(parse_reading(SOIL_VAR, "lots"), 0);
        assert_eq!(parse_reading(SOIL_VAR, "2.5"), 0);
        assert_eq!(parse_reading(SOIL_VAR, ""), 0);
    }

    // Only this test touches the process environment, and only under its
    // own variable names, so it can't race with the others.
    #[test]
    fn test_env_read() {
        let conditions = EnvConditions::new();

        env::set_var("POMODORO_TEST_READING", "5");
        assert_eq!(conditions.read("POMODORO_TEST_READING"), 5);

        env::set_var("POMODORO_TEST_READING", "nope");
        assert_eq!(conditions.read("POMODORO_TEST_READING"), 0);

        env::remove_var("POMODORO_TEST_READING");
        assert_eq!(conditions.read("POMODORO_TEST_READING"), 0);
    }
}
