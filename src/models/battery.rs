use serde::{Deserialize, Serialize};

/// One observation of a battery cell at a given charge/discharge cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatteryRecord {
    pub cycle: i32,
    /// Measured capacity in ampere-hours
    pub capacity: f64,
    /// Ratio of current capacity to rated capacity
    pub state_of_health: f64,
    pub remaining_useful_life: f64,
    /// Cell identifier or test cohort
    pub group: String,
}

impl BatteryRecord {
    pub fn new(
        cycle: i32,
        capacity: f64,
        state_of_health: f64,
        remaining_useful_life: f64,
        group: impl Into<String>,
    ) -> Self {
        Self {
            cycle,
            capacity,
            state_of_health,
            remaining_useful_life,
            group: group.into(),
        }
    }
}
