use serde::{Deserialize, Serialize};

/// Number of equally likely birthdays. Leap day is not modeled.
pub const DAYS_IN_YEAR: u16 = 365;

/// A day-of-year in `0..DAYS_IN_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Birthday(u16);

impl Birthday {
    pub fn new(day_of_year: u16) -> Option<Self> {
        (day_of_year < DAYS_IN_YEAR).then_some(Self(day_of_year))
    }

    pub fn day_of_year(self) -> u16 {
        self.0
    }

    /// Callers must guarantee `day_of_year < DAYS_IN_YEAR`.
    pub(crate) fn from_sampled(day_of_year: u16) -> Self {
        debug_assert!(day_of_year < DAYS_IN_YEAR);
        Self(day_of_year)
    }
}

impl TryFrom<u16> for Birthday {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Birthday::new(value)
            .ok_or_else(|| format!("day of year {} is outside 0..{}", value, DAYS_IN_YEAR))
    }
}

impl From<Birthday> for u16 {
    fn from(birthday: Birthday) -> Self {
        birthday.0
    }
}

/// One trial's sampled birthdays, owned by that trial.
pub type Group = Vec<Birthday>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub group_size: usize,
    pub trial_count: u64,
    pub collision_count: u64,
    pub probability: f64,
}

impl SimulationSummary {
    pub fn new(group_size: usize, trial_count: u64, collision_count: u64) -> Self {
        let probability = if trial_count == 0 {
            0.0
        } else {
            collision_count as f64 / trial_count as f64
        };

        Self {
            group_size,
            trial_count,
            collision_count,
            probability,
        }
    }

    /// Probability as a percentage rounded to `decimals` places.
    pub fn percentage(&self, decimals: u32) -> f64 {
        let scale = 10f64.powi(decimals as i32);
        (self.probability * 100.0 * scale).round() / scale
    }
}

/// A single displayed group and the birthday it shares, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleGroup {
    pub birthdays: Group,
    pub matching: Option<Birthday>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub example: Option<ExampleGroup>,
    pub summary: SimulationSummary,
    pub exact_probability: f64,
}
